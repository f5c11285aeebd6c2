use console::style;
use wabulk_browser::{login, WebDriverSession};
use wabulk_core::config::Config;
use wabulk_core::session::BrowserSession;

/// Open WhatsApp Web in a fresh browser session and wait for login.
///
/// The Chrome profile is persistent, so a completed QR scan carries over to
/// later `send` runs.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let session = WebDriverSession::connect(
        &cfg.browser,
        &cfg.wabulk.data_dir,
        cfg.timeouts.poll_interval(),
    )
    .await?;

    println!("Scan the QR code in the opened browser window...");
    let outcome = login::wait_for_login(
        &session,
        &cfg.browser.base_url,
        cfg.timeouts.login_wait(),
    )
    .await;

    let _ = session.quit().await;
    outcome?;

    println!("{} logged in — session saved to the browser profile", style("✓").green());
    Ok(())
}
