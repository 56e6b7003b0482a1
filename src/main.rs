mod chrome;
mod config;
mod services;
mod state;
mod widgets;

use gtk::glib;
use gtk::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::services::translation::TranslationClient;
use crate::widgets::TranslateWindow;

const APP_ID: &str = "org.gtk_rs.wintranslate";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wintranslate=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_settings() -> Settings {
    match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to default settings");
            Settings::default()
        }
    }
}

fn build_ui(app: &gtk::Application, settings: &Settings) {
    let endpoint = match settings.endpoint() {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(error = %e, "no usable translation endpoint");
            return;
        }
    };

    let client = TranslationClient::new(endpoint);
    tracing::info!(endpoint = %client.endpoint(), "translation service configured");

    let window = TranslateWindow::new(app, settings, client);
    window.present();
}

fn main() -> glib::ExitCode {
    init_tracing();
    let settings = load_settings();

    let app = gtk::Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| build_ui(app, &settings));
    app.run()
}
