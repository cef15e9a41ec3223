// Events that flow back into the TUI event loop from spawned tasks
//
// A clipboard copy runs as its own task so the UI thread never blocks on
// clipboard access. Its single resolution comes back through the app-event
// channel as a typed message, which keeps notification ordering explicit:
// the "no email client" toast always precedes the copy-result toast.

/// What a finished copy task was copying. Decides the feedback wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    /// The contact email address (the core flow).
    EmailAddress,
    /// An expanded interest card's text.
    CardText,
    /// The whole profile as JSON.
    ProfileJson,
}

/// Messages delivered to the event loop from outside the key-input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A clipboard copy task resolved with a definite outcome.
    CopyFinished { kind: CopyKind, ok: bool },
}
