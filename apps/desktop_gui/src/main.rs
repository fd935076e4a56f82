//! Desktop client for the Lizzie Oliver author site. All content is read
//! from the remote gateway; this process holds only the current route and
//! per-page snapshots.

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::SiteApp;

#[derive(Debug, Parser)]
#[command(name = "lizzie-oliver-site", about = "Author site desktop client")]
struct Args {
    /// Override the content gateway base url.
    #[arg(long)]
    gateway_url: Option<String>,
    /// Override the content gateway anon key.
    #[arg(long)]
    gateway_key: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let mut settings = gateway::load_settings();
    if let Some(url) = args.gateway_url {
        settings.url = url;
    }
    if let Some(key) = args.gateway_key {
        settings.anon_key = key;
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Lizzie Oliver")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Lizzie Oliver",
        options,
        Box::new(|_cc| Ok(Box::new(SiteApp::new(cmd_tx, ui_rx)))),
    )
}
