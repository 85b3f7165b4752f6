//! The external browser surface used for the authorization step.
//!
//! The embedding application owns the actual in-app browser; the SDK only drives it through
//! these traits.

use async_trait::async_trait;
use thiserror::Error;

/// Events emitted by an open browser surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// The surface started navigating to a new URL.
    NavigationStarted {
        /// Target URL of the navigation.
        url: String,
    },
    /// The user closed the surface.
    Exited,
}

/// An error opening the browser surface.
#[derive(Debug, Error)]
#[error("Failed to open browser surface: {0}")]
pub struct BrowserOpenError(pub String);

/// A handle to an open browser surface.
///
/// The handle yields navigation events in the order the surface emits them. `None` means the
/// surface will emit no further events.
#[async_trait]
pub trait BrowserHandle: Send {
    /// Wait for the next event from the surface.
    async fn next_event(&mut self) -> Option<BrowserEvent>;

    /// Close the surface. Events the surface emits after this call are discarded.
    async fn close(&mut self);
}

/// An in-app browser surface the embedding application provides for the authorization step.
#[async_trait]
pub trait AuthorizeBrowser: Send + Sync {
    /// Open the surface at `url` and start observing its navigation.
    async fn open(&self, url: &str) -> Result<Box<dyn BrowserHandle>, BrowserOpenError>;
}
