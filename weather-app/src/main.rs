//! Binary crate for the weather desktop app.
//!
//! One screen: a location search field, and the current conditions for the
//! latest search on a day/night-adaptive background.

use std::sync::Arc;

use anyhow::Context;
use eframe::egui;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use weather_core::{Config, WeatherApiProvider, WeatherProvider};

mod app;
mod theme;
mod view;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting weather v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().context("Failed to load configuration")?;
    let api_key = config.resolve_api_key()?;
    let provider: Arc<dyn WeatherProvider> = Arc::new(WeatherApiProvider::new(api_key));

    // The runtime outlives the UI loop; background fetches run on it.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Weather"),
        ..Default::default()
    };

    eframe::run_native(
        "Weather",
        options,
        Box::new(move |cc| Ok(Box::new(app::WeatherApp::new(cc, provider, handle)))),
    )
    .map_err(|err| anyhow::anyhow!("UI loop failed: {err}"))
}
