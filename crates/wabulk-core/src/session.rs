use crate::error::WabulkError;
use async_trait::async_trait;
use std::time::Duration;

/// Opaque handle to a located page element.
///
/// Only meaningful to the session that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementHandle(pub String);

impl ElementHandle {
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Browser Session trait — the single seam to the driven browser.
///
/// An implementation wraps one live, already-bootstrapped browser. The
/// session is a shared mutable resource: it is NOT safe to drive from two
/// workflows at once, so exactly one bulk-send run may hold it at a time.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Load a URL in the session's window.
    async fn navigate(&self, url: &str) -> Result<(), WabulkError>;

    /// Poll for an element until it is present or the bounded timeout
    /// expires. Expiry yields `WabulkError::ElementTimeout`.
    async fn wait_for_element(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<ElementHandle, WabulkError>;

    /// Locate an element immediately. Missing elements yield
    /// `WabulkError::Element`.
    async fn find_element(&self, selector: &str) -> Result<ElementHandle, WabulkError>;

    /// Click an element.
    async fn click(&self, element: &ElementHandle) -> Result<(), WabulkError>;

    /// Type text (or a file path, for file inputs) into an element.
    async fn send_input(&self, element: &ElementHandle, text: &str) -> Result<(), WabulkError>;

    /// Submit an element's form — the Enter-key equivalent.
    async fn submit(&self, element: &ElementHandle) -> Result<(), WabulkError>;

    /// Tear down the underlying browser session.
    async fn quit(&self) -> Result<(), WabulkError>;
}
