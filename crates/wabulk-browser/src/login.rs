//! WhatsApp Web login wait.
//!
//! Authentication itself is external: the user scans the QR code that
//! WhatsApp Web renders in the driven browser. This module only navigates
//! there and waits, bounded, for the logged-in chat list to appear.

use std::time::Duration;
use tracing::info;
use wabulk_core::error::WabulkError;
use wabulk_core::selectors;
use wabulk_core::session::BrowserSession;

/// Navigate to WhatsApp Web and block until login completes or the bounded
/// wait expires. With a persistent profile an earlier pairing logs in
/// without a new scan.
pub async fn wait_for_login(
    session: &dyn BrowserSession,
    base_url: &str,
    timeout: Duration,
) -> Result<(), WabulkError> {
    session.navigate(base_url).await?;
    info!(
        "waiting up to {}s for WhatsApp Web login — scan the QR code if prompted",
        timeout.as_secs()
    );
    session
        .wait_for_element(selectors::CHAT_LIST, timeout)
        .await?;
    info!("WhatsApp Web session is logged in");
    Ok(())
}
