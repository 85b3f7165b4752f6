//! Typed in-process notifications published to the embedding application.

/// Events this SDK publishes. The embedding application decides what, if anything, to do with
/// them; no response is ever awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The logged-in user's profile was committed and should be re-read by interested screens.
    LoggedInProfileRefreshed,
}

/// Fire-and-forget notification channel the embedding application injects into the SDK.
pub trait EventSink: Send + Sync {
    #[allow(missing_docs)]
    fn publish(&self, event: AppEvent);
}

/// Sink that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn publish(&self, _event: AppEvent) {}
}
