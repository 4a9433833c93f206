//! Tic-tac-toe GUI
//!
//! A graphical interface for playing tic-tac-toe against the computer.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([560.0, 440.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
