//! Handler für auf-/zuklappbare Seitenabschnitte.

use crate::app::AppState;

/// Schaltet ein Akkordeon um.
pub fn toggle_accordion(state: &mut AppState, section: &str) -> anyhow::Result<()> {
    match state.sections.toggle_accordion(section) {
        Some(_) => Ok(()),
        None => anyhow::bail!("Unbekannter Akkordeon-Abschnitt: {section}"),
    }
}

/// Schaltet einen Expertise-Eintrag um; ein anderer offener Eintrag wird geschlossen.
pub fn toggle_expertise_item(state: &mut AppState, item: &str) -> anyhow::Result<()> {
    if !state.content.expertise.items.contains_key(item) {
        anyhow::bail!("Unbekannter Expertise-Eintrag: {item}");
    }
    state.sections.toggle_expertise(item);
    Ok(())
}

/// Schaltet den Zusatztext im Über-mich-Bereich um.
pub fn toggle_about_details(state: &mut AppState) {
    state.sections.about_expanded = !state.sections.about_expanded;
}
