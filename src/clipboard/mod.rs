// Clipboard service
//
// Copies text to the system clipboard with graceful degradation:
// - Preferred: the OS clipboard via `arboard` (system.rs)
// - Fallback: an OSC 52 escape sequence on the terminal (osc52.rs),
//   which also works over SSH where no display server is reachable
//
// Hard contract: `copy` always resolves to a definite bool. Failures are
// logged at debug level and converted to `false`; nothing here panics or
// returns an error to the caller.

mod osc52;
mod system;

pub use osc52::Osc52Clipboard;
pub use system::SystemClipboard;

use std::io::IsTerminal;
use tracing::debug;

/// A single clipboard mechanism. Implementations report failure through
/// `Result` and the chain in [`copy_with`] turns that into an outcome.
pub trait Backend: Send {
    fn name(&self) -> &'static str;
    fn write(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Which copy mechanisms this environment offers, probed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The system clipboard is reachable (fallback also on standby).
    System,
    /// Only the OSC 52 escape route exists (e.g. headless or SSH session).
    FallbackOnly,
    /// Neither mechanism exists; copying must be done by hand.
    None,
}

impl Capability {
    /// Probe the platform. Pure read, no retry, no side effects beyond a
    /// throwaway clipboard handle.
    pub fn probe() -> Self {
        let system = arboard::Clipboard::new().is_ok();
        let terminal = std::io::stdout().is_terminal();
        match (system, terminal) {
            (true, _) => Capability::System,
            (false, true) => Capability::FallbackOnly,
            (false, false) => Capability::None,
        }
    }

    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Capability::System => "system",
            Capability::FallbackOnly => "osc52",
            Capability::None => "none",
        }
    }
}

/// Try each backend in order until one succeeds.
///
/// This is the synchronous core of the service; it is what tests drive with
/// mock backends. Per-backend errors are absorbed and logged.
pub fn copy_with(backends: &mut [Box<dyn Backend>], text: &str) -> bool {
    for backend in backends.iter_mut() {
        match backend.write(text) {
            Ok(()) => {
                debug!("clipboard write ok via {}", backend.name());
                return true;
            }
            Err(e) => {
                debug!("clipboard write via {} failed: {e:#}", backend.name());
            }
        }
    }
    false
}

fn default_backends() -> Vec<Box<dyn Backend>> {
    vec![
        Box::new(SystemClipboard),
        Box::new(Osc52Clipboard::stdout()),
    ]
}

/// Copy `text` to the clipboard, resolving to whether any mechanism
/// reported success.
///
/// Clipboard access can block (X11 roundtrips, Wayland handshakes), so the
/// whole chain runs on a blocking worker thread while the event loop keeps
/// rendering. A join failure counts as a failed copy.
pub async fn copy(text: String) -> bool {
    let task = tokio::task::spawn_blocking(move || copy_with(&mut default_backends(), &text));
    match task.await {
        Ok(ok) => ok,
        Err(e) => {
            debug!("clipboard task did not complete: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Mock backend with a scripted outcome and a call counter.
    struct Scripted {
        name: &'static str,
        succeed: bool,
        calls: Arc<AtomicUsize>,
    }

    impl Scripted {
        fn new(name: &'static str, succeed: bool) -> (Box<dyn Backend>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Box::new(Scripted {
                    name,
                    succeed,
                    calls: calls.clone(),
                }),
                calls,
            )
        }
    }

    impl Backend for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        fn write(&mut self, _text: &str) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.succeed {
                Ok(())
            } else {
                Err(anyhow!("scripted failure"))
            }
        }
    }

    #[test]
    fn preferred_success_skips_fallback() {
        let (preferred, _) = Scripted::new("preferred", true);
        let (fallback, fallback_calls) = Scripted::new("fallback", false);

        let mut backends = vec![preferred, fallback];
        assert!(copy_with(&mut backends, "alice@example.com"));
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn preferred_failure_escalates_to_fallback() {
        let (preferred, preferred_calls) = Scripted::new("preferred", false);
        let (fallback, fallback_calls) = Scripted::new("fallback", true);

        let mut backends = vec![preferred, fallback];
        assert!(copy_with(&mut backends, "alice@example.com"));
        assert_eq!(preferred_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn outcome_tracks_fallback_result() {
        let (preferred, _) = Scripted::new("preferred", false);
        let (fallback, _) = Scripted::new("fallback", false);

        let mut backends = vec![preferred, fallback];
        assert!(!copy_with(&mut backends, "text"));
    }

    #[test]
    fn empty_chain_reports_failure() {
        let mut backends: Vec<Box<dyn Backend>> = Vec::new();
        assert!(!copy_with(&mut backends, "text"));
    }
}
