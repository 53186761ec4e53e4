//! Handler für den Tilt-Effekt der Service-Karten.

use crate::app::AppState;
use crate::core::TiltController;
use anyhow::anyhow;
use glam::Vec2;

fn controller<'a>(state: &'a mut AppState, card: &str) -> anyhow::Result<&'a mut TiltController> {
    state
        .tilt
        .get_mut(card)
        .ok_or_else(|| anyhow!("Unbekannte Service-Karte: {card}"))
}

/// Maus-Bewegung über einer Karte.
pub fn pointer_move(
    state: &mut AppState,
    card: &str,
    position: Vec2,
    size: Option<Vec2>,
) -> anyhow::Result<()> {
    controller(state, card)?.pointer_moved(position, size);
    Ok(())
}

/// Maus verlässt eine Karte.
pub fn pointer_leave(state: &mut AppState, card: &str) -> anyhow::Result<()> {
    controller(state, card)?.pointer_left();
    Ok(())
}

/// Touch-Geste beginnt.
pub fn touch_start(
    state: &mut AppState,
    card: &str,
    position: Vec2,
    size: Option<Vec2>,
) -> anyhow::Result<()> {
    controller(state, card)?.touch_started(position, size);
    Ok(())
}

/// Touch-Geste bewegt sich.
pub fn touch_move(
    state: &mut AppState,
    card: &str,
    position: Vec2,
    size: Option<Vec2>,
) -> anyhow::Result<()> {
    controller(state, card)?.touch_moved(position, size);
    Ok(())
}

/// Touch-Geste endet.
pub fn touch_end(state: &mut AppState, card: &str) -> anyhow::Result<()> {
    controller(state, card)?.touch_ended();
    Ok(())
}
