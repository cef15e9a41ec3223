// pcard - Personal contact card for your terminal
//
// Renders a personal page (hero, interest cards, contact email) as a TUI
// and wires up its interactions:
// - Clipboard: copy the email address with a system-clipboard preferred
//   path and an OSC 52 fallback
// - Notifications: transient auto-dismissing toasts
// - Mail: best-effort mail-client detection, mailto hand-off or copy
// - Cards: interest cards expand into modal overlays
//
// Architecture:
// - TUI (ratatui): single event loop owning all UI state
// - Clipboard service: backend chain run off-thread, resolving to a bool
// - Logging: tracing captured in-memory so the alternate screen stays clean

mod cli;
mod clipboard;
mod config;
mod events;
mod logging;
mod mailer;
mod messages;
mod profile;
mod tui;
mod util;

use anyhow::{bail, Result};
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --update)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // The page needs a terminal to present on; bail before touching the
    // screen rather than notifying into the void
    if !std::io::stdout().is_terminal() {
        bail!("pcard needs an interactive terminal (stdout is not a tty)");
    }

    // Create log buffer for the TUI logs modal
    let log_buffer = LogBuffer::new();

    // Initialize tracing. Logs go to the in-memory buffer (printing would
    // garble the alternate screen) and optionally to rotating files.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("pcard={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must stay alive for the duration of the program so file
    // logs flush on exit
    let mut _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> = None;
    let file_layer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let appender =
                    tracing_appender::rolling::daily(&config.logging.file_dir, "pcard.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                _file_guard = Some(guard);
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()))
        .with(file_layer)
        .init();

    tracing::info!("pcard v{} starting", config::VERSION);

    tui::run_tui(config, log_buffer).await
}
