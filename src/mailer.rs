// Mail client detection and launch
//
// Decides, per activation of the email affordance, whether to hand off to
// the platform mail client or to intervene with a clipboard copy. Detection
// scans an environment identification string for configured markers; it is
// best-effort and both false positives and false negatives are accepted.

use anyhow::Context;
use std::process::{Command, Stdio};
use tracing::debug;

/// Everything one activation of the email affordance gets to look at.
/// Read-only; built fresh per activation.
#[derive(Debug, Clone)]
pub struct ClickContext {
    /// The affordance's visible text, i.e. the email address.
    pub address: String,
    /// Lowercased identification string assembled from the environment.
    pub environment: String,
}

impl ClickContext {
    pub fn new(address: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            environment: environment.into(),
        }
    }
}

/// Outcome of the heuristic for one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// A mail client seems to be around; let the mailto hand-off proceed.
    LaunchClient,
    /// Nothing detected; suppress the hand-off and copy the address instead.
    CopyAddress,
}

/// Environment variables consulted for the identification string, in order.
const ENVIRONMENT_VARS: &[&str] = &[
    "MAILER",
    "DEFAULT_EMAIL_CLIENT",
    "XDG_CURRENT_DESKTOP",
    "TERM_PROGRAM",
];

/// Assemble the lowercased identification string from the environment.
pub fn environment_id() -> String {
    let mut parts = Vec::new();
    for var in ENVIRONMENT_VARS {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                parts.push(value.to_lowercase());
            }
        }
    }
    parts.join(" ")
}

/// Check the identification string for any configured mail-client marker.
/// Markers are matched as case-insensitive substrings.
pub fn has_mail_client(environment: &str, markers: &[String]) -> bool {
    let environment = environment.to_lowercase();
    markers
        .iter()
        .any(|m| !m.is_empty() && environment.contains(&m.to_lowercase()))
}

/// The per-activation decision. Stateless across activations.
pub fn decide(ctx: &ClickContext, markers: &[String]) -> ClickAction {
    if has_mail_client(&ctx.environment, markers) {
        ClickAction::LaunchClient
    } else {
        ClickAction::CopyAddress
    }
}

/// Hand the address to the platform mail client via a `mailto:` URL.
///
/// Spawns the platform opener detached; the TUI keeps running. The spawn
/// result is all we can observe - whether a client actually opened is up
/// to the desktop.
pub fn launch_mail_client(address: &str) -> anyhow::Result<()> {
    let url = format!("mailto:{address}");
    debug!("launching mail client for {url}");

    let mut command = opener_command(&url);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn opener for {url}"))?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut c = Command::new("open");
    c.arg(url);
    c
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut c = Command::new("cmd");
    c.args(["/C", "start", "", url]);
    c
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut c = Command::new("xdg-open");
    c.arg(url);
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_marker_match_means_copy() {
        let ctx = ClickContext::new("alice@example.com", "gnome wezterm");
        let action = decide(&ctx, &markers(&["thunderbird", "mutt", "mail"]));
        assert_eq!(action, ClickAction::CopyAddress);
    }

    #[test]
    fn marker_match_means_launch() {
        let ctx = ClickContext::new("alice@example.com", "kde thunderbird");
        let action = decide(&ctx, &markers(&["thunderbird", "mutt"]));
        assert_eq!(action, ClickAction::LaunchClient);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(has_mail_client("Thunderbird on KDE", &markers(&["thunderbird"])));
        assert!(has_mail_client("thunderbird", &markers(&["ThunderBird"])));
    }

    #[test]
    fn empty_environment_never_matches() {
        assert!(!has_mail_client("", &markers(&["thunderbird", "mutt"])));
    }

    #[test]
    fn empty_markers_never_match() {
        assert!(!has_mail_client("thunderbird", &[]));
        // An empty marker string must not match everything
        assert!(!has_mail_client("anything", &markers(&[""])));
    }
}
