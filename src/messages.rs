// User-facing notification texts
//
// Every message the toast presenter can show lives here, split into the
// success and error tables. Keeping them as named constants lets tests
// assert on exact wording without reaching into the UI.

/// Classification of a notification, controlling its visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Success messages.
pub mod success {
    /// Shown when the email address landed on the clipboard.
    pub const EMAIL_COPIED: &str = "Email address copied to clipboard!";

    /// Shown when card or profile text landed on the clipboard.
    pub const TEXT_COPIED: &str = "Copied to clipboard.";
}

/// Error messages.
pub mod error {
    /// Shown when no clipboard mechanism exists at all (startup check).
    pub const CLIPBOARD_UNSUPPORTED: &str =
        "This terminal does not support automatic copying. Please copy the email address manually.";

    /// Shown when both copy mechanisms reported failure.
    pub const COPY_FAILED: &str = "Copy failed. Please copy the address manually.";

    /// Shown immediately when the mail-client heuristic finds nothing.
    pub const NO_MAIL_CLIENT: &str =
        "No email client detected. Email address has been copied to clipboard.";

    /// Shown when spawning the platform mail client failed.
    pub const MAIL_LAUNCH_FAILED: &str = "Could not launch the mail client.";
}

/// Map a copy outcome for the email address to its feedback message.
pub fn email_copy_feedback(ok: bool) -> (&'static str, Severity) {
    if ok {
        (success::EMAIL_COPIED, Severity::Success)
    } else {
        (error::COPY_FAILED, Severity::Error)
    }
}

/// Map a copy outcome for card or profile text to its feedback message.
pub fn text_copy_feedback(ok: bool) -> (&'static str, Severity) {
    if ok {
        (success::TEXT_COPIED, Severity::Success)
    } else {
        (error::COPY_FAILED, Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_feedback_matches_outcome() {
        assert_eq!(
            email_copy_feedback(true),
            (success::EMAIL_COPIED, Severity::Success)
        );
        assert_eq!(
            email_copy_feedback(false),
            (error::COPY_FAILED, Severity::Error)
        );
    }

    #[test]
    fn text_feedback_matches_outcome() {
        assert_eq!(
            text_copy_feedback(true),
            (success::TEXT_COPIED, Severity::Success)
        );
        assert_eq!(
            text_copy_feedback(false),
            (error::COPY_FAILED, Severity::Error)
        );
    }
}
