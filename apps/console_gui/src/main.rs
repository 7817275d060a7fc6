mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use console_core::config::{load_settings, normalize_service_url};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::ConsoleApp;

#[derive(Parser, Debug)]
#[command(name = "customer-console-gui", about = "Customer management console")]
struct Args {
    /// Overrides the service url from console.toml and the environment.
    #[arg(long)]
    service_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings().context("failed to load console settings")?;
    if let Some(url) = args.service_url.as_deref() {
        settings.service_url = normalize_service_url(url)?;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(settings.service_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Customer Management")
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    let service_url = settings.service_url;
    eframe::run_native(
        "Customer Management",
        options,
        Box::new(move |_cc| Ok(Box::new(ConsoleApp::new(cmd_tx, ui_rx, service_url)))),
    )
    .map_err(|err| anyhow!("console window failed: {err}"))
}
