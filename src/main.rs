mod app;
mod breadcrumb;
mod config;
mod io;
mod registry;
mod state;
mod style;
mod view;

use app::LearnDsa;
use config::Config;
use eframe::egui;
use registry::{Registry, RegistryError};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = Config::create_default() {
        log::warn!("Failed to create default config: {}", e);
    }
    let config = Config::load();

    let registry = match load_registry(&config) {
        Ok(registry) => registry,
        Err(e) => {
            log::error!("Built-in navigation registry is invalid: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Learn DSA"),
        ..Default::default()
    };

    eframe::run_native(
        "Learn DSA",
        options,
        Box::new(move |cc| Ok(Box::new(LearnDsa::new(&cc.egui_ctx, config, registry)))),
    )
}

/// The configured registry file if it loads cleanly, otherwise the built-in one.
fn load_registry(config: &Config) -> Result<Registry, RegistryError> {
    if let Some(path) = &config.registry.path {
        match Registry::load(path) {
            Ok(registry) => {
                log::info!("Loaded navigation registry from {}", path.display());
                return Ok(registry);
            }
            Err(e) => {
                log::error!("Ignoring navigation registry {}: {}", path.display(), e);
            }
        }
    }
    Registry::reference()
}
