// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, app events)
// - Rendering the page
// - The email-activation and copy flows

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod views;

use crate::clipboard::{self, Capability};
use crate::config::Config;
use crate::events::{AppEvent, CopyKind};
use crate::logging::LogBuffer;
use crate::mailer::{self, ClickAction, ClickContext};
use crate::messages::{self, Severity};
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let startup = Instant::now();

    // Probe clipboard mechanisms once, before the alternate screen owns stdout
    let capability = Capability::probe();

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let capability_notice =
        Duration::from_millis(config.notifications.capability_notice_ms);
    let mut app = App::with_config(config, log_buffer, capability);

    // One-time capability check: if no mechanism exists at all, warn now,
    // for longer than a normal toast
    if capability == Capability::None {
        warn!("no clipboard mechanism available");
        app.notify_for(
            messages::error::CLIPBOARD_UNSUPPORTED,
            Severity::Error,
            capability_notice,
        );
    }

    info!("interface ready in {} ms", startup.elapsed().as_millis());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources at once via tokio::select!:
/// 1. Keyboard input (navigation and commands)
/// 2. Timer ticks (periodic redraws; toast expiry becomes visible here)
/// 3. App events (clipboard copy resolutions re-entering the loop)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(16);

    // Periodic redraw ticker (10 FPS is plenty for a static page)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event, &tx);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {}

            // Copy task resolutions
            Some(app_event) = rx.recv() => {
                app.handle_app_event(app_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Section
fn handle_key_event(app: &mut App, key_event: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event, tx) {
        return;
    }

    // Layer 2: Global keys (work regardless of focus)
    if handle_global_keys(app, &key_event, tx) {
        return;
    }

    // Layer 3: Section keys (focus switching and card selection)
    match key_event.kind {
        KeyEventKind::Press => {
            let key = key_event.code;
            match key {
                KeyCode::Tab | KeyCode::BackTab => {
                    if app.handle_key_press(key) {
                        app.focus_next();
                    }
                }
                KeyCode::Enter => {
                    if app.handle_key_press(key) {
                        match app.focus {
                            Focus::Cards => app.open_selected_card(),
                            Focus::Contact => activate_email(app, tx),
                        }
                    }
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    if app.handle_key_press(key) && app.focus == Focus::Cards {
                        app.select_prev_card();
                    }
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    if app.handle_key_press(key) && app.focus == Focus::Cards {
                        app.select_next_card();
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    if app.handle_key_press(key) && app.focus == Focus::Cards {
                        app.select_card_up();
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if app.handle_key_press(key) && app.focus == Focus::Cards {
                        app.select_card_down();
                    }
                }
                _ => {}
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// Handle modal input - returns true if the modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent, tx: &mpsc::Sender<AppEvent>) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync.
    // Without this, keys get stuck in "pressed" state after modal closes.
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => {
            app.modal = None;
        }
        ModalAction::CopyCard => {
            if let Some(index) = modal.card_index() {
                if let Some(text) = app.card_text(index) {
                    spawn_copy(text, CopyKind::CardText, tx.clone());
                }
            }
        }
    }

    true
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of focus
fn handle_global_keys(app: &mut App, key_event: &KeyEvent, tx: &mpsc::Sender<AppEvent>) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Help modal
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(modal::Modal::help());
            }
            true
        }
        // Logs modal
        KeyCode::Char('L') => {
            if app.handle_key_press(key) {
                app.modal = Some(modal::Modal::logs());
            }
            true
        }
        // Theme cycle
        KeyCode::Char('t') | KeyCode::Char('T') => {
            if app.handle_key_press(key) {
                app.next_theme();
            }
            true
        }
        // Copy the email address directly (the page's copy button)
        KeyCode::Char('c') => {
            if app.handle_key_press(key) {
                spawn_copy(
                    app.profile.email.clone(),
                    CopyKind::EmailAddress,
                    tx.clone(),
                );
            }
            true
        }
        // Copy the whole profile as JSON
        KeyCode::Char('Y') => {
            if app.handle_key_press(key) {
                if let Some(json) = app.profile.to_json() {
                    spawn_copy(json, CopyKind::ProfileJson, tx.clone());
                }
            }
            true
        }
        _ => false,
    }
}

/// One activation of the email affordance.
///
/// Heuristic first: with a mail client around, hand off to it and stay
/// quiet. Otherwise suppress the hand-off, warn immediately, and start the
/// async copy; its resolution comes back through the app-event channel and
/// supersedes the warning.
fn activate_email(app: &mut App, tx: &mpsc::Sender<AppEvent>) {
    let ctx = ClickContext::new(app.profile.email.clone(), mailer::environment_id());

    match mailer::decide(&ctx, &app.mail_markers) {
        ClickAction::LaunchClient => {
            if let Err(e) = mailer::launch_mail_client(&ctx.address) {
                warn!("mail client launch failed: {e:#}");
                app.notify(messages::error::MAIL_LAUNCH_FAILED, Severity::Error);
            }
        }
        ClickAction::CopyAddress => {
            app.notify(messages::error::NO_MAIL_CLIENT, Severity::Error);
            spawn_copy(ctx.address, CopyKind::EmailAddress, tx.clone());
        }
    }
}

/// Start a copy task; its single resolution is sent back as an AppEvent
fn spawn_copy(text: String, kind: CopyKind, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let ok = clipboard::copy(text).await;
        let _ = tx.send(AppEvent::CopyFinished { kind, ok }).await;
    });
}
