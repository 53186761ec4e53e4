//! Landing Presenter.
//!
//! Desktop-Vorschau der zweisprachigen Landing-Page (en/nl) mit egui:
//! Service-Karten mit 3D-Tilt, Bild-Modal und Sprach-Umschalter.

use anyhow::Context as _;
use eframe::egui;
use landing_i18n::{schema, TranslationTree};
use landing_presenter::{ui, AppController, AppIntent, AppState, LandingOptions};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Landing Presenter v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte); beim ersten Start Vorlage schreiben
        let config_path = LandingOptions::config_path();
        let landing_options = LandingOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = landing_options.save_to_file(&config_path) {
                log::warn!("Optionen-Vorlage konnte nicht geschrieben werden: {:#}", e);
            }
        }

        let tree = load_translations(&landing_options)?;

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(landing_options.window_size)
                .with_title("Landing Presenter"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Landing Presenter",
            native_options,
            Box::new(move |cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(LandingApp::new(tree, landing_options)))
            }),
        )
        .map_err(|e| anyhow::anyhow!("eframe beendet mit Fehler: {e}"))
    }
}

/// Lädt Übersetzungen und meldet Schema-Verstöße und Paritätslücken einmalig.
fn load_translations(options: &LandingOptions) -> anyhow::Result<Arc<TranslationTree>> {
    let tree = TranslationTree::load_dir(&options.locales_dir).with_context(|| {
        format!(
            "Übersetzungen aus {} konnten nicht geladen werden",
            options.locales_dir.display()
        )
    })?;

    for violation in schema::validate(&tree) {
        log::warn!(
            "Schema-Verstoß [{}] bei `{}`: {}",
            violation.language,
            violation.path,
            violation.problem
        );
    }
    for gap in tree.parity_gaps() {
        log::warn!(
            "Übersetzungslücke [{}] bei `{}`: {:?}",
            gap.language,
            gap.path,
            gap.kind
        );
    }

    Ok(Arc::new(tree))
}

/// Haupt-Anwendungsstruktur
struct LandingApp {
    state: AppState,
    controller: AppController,
    view: ui::LandingView,
}

impl LandingApp {
    fn new(tree: Arc<TranslationTree>, options: LandingOptions) -> Self {
        let initial_language = options.initial_language;
        let mut app = Self {
            state: AppState::new(tree, options),
            controller: AppController::new(),
            view: ui::LandingView::new(),
        };
        app.process_events(vec![AppIntent::InitialLanguageConfigured {
            language: initial_language,
        }]);
        app
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.state.should_exit {
            self.process_events(vec![AppIntent::ExitRequested]);
        }

        let events = self.view.show(ctx, &self.state);
        let has_events = !events.is_empty();
        self.process_events(events);

        // Fokus- und Tilt-Änderungen im nächsten Frame sichtbar machen
        if has_events {
            ctx.request_repaint();
        }
    }
}
