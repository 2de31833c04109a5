//! # Greenline Main Entry Point
//!
//! Clean MVVM storefront client for a remote plant catalog.

use anyhow::Result;
use greenline::cmd_args::CommandLineArgs;
use greenline::shop::io::{TerminalEventStream, TerminalRenderStream};
use greenline::AppController;

/// Set up file-based logging when GREENLINE_LOG points at a log file.
///
/// Logging to stdout is not an option once the alternate screen is active,
/// so without the env var all tracing output is dropped.
fn init_logging() {
    if let Some(path) = greenline::config::get_log_path() {
        if let Ok(file) = std::fs::File::create(&path) {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .try_init();
            tracing::info!("Logging to {path}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cmd_args = CommandLineArgs::parse();

    // Create and run the application controller
    let mut app = AppController::with_io_streams(
        cmd_args,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;

    // Print welcome message before starting
    println!("🌿 Greenline Plant Store");
    println!("Use 'Tab' to switch between categories, items and cart");
    println!("Use 'j', 'k' or arrow keys to move the selection");
    println!("Press 'Enter' to pick a category or open an item");
    println!("Press 'a' to add to cart, '+'/'-'/'x' to adjust cart lines");
    println!("Press 'q' or 'Ctrl+C' to quit");

    // Run the application
    app.run().await?;

    println!("\n👋 Thanks for shopping with Greenline!");
    Ok(())
}
