use clap::Parser;
use crossbeam_channel::bounded;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use controller::orchestration::dispatch_backend_command;
use ui::app::DirectoryApp;

/// Desktop form-and-list client for the remote user directory API.
#[derive(Debug, Parser)]
#[command(name = "user-directory")]
struct Cli {
    /// Base address of the remote user store.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    server_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cli.server_url, cmd_rx, ui_tx);

    // Initial list load. If it fails the worker logs it and the list simply
    // starts empty; the user sees no notice for a failed load.
    let mut startup_status = String::new();
    dispatch_backend_command(&cmd_tx, BackendCommand::LoadUsers, &mut startup_status);
    if !startup_status.is_empty() {
        tracing::warn!("initial user load was not queued: {startup_status}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("User Directory")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "User Directory",
        options,
        Box::new(move |_cc| Ok(Box::new(DirectoryApp::new(cmd_tx, ui_rx)))),
    )
}
