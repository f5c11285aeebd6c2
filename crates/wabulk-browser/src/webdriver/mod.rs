//! Minimal W3C WebDriver client.
//!
//! Speaks the same wire protocol Selenium does, directly over HTTP against a
//! chromedriver-compatible endpoint. Only the handful of commands the send
//! workflow needs: new session, navigate, find element, click, send keys,
//! delete session.
//! Spec: <https://www.w3.org/TR/webdriver2/>

mod session;
mod wire;


use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, warn};
use wabulk_core::config::BrowserConfig;
use wabulk_core::error::WabulkError;
use wabulk_core::session::ElementHandle;

use wire::{chrome_capabilities, classify_error, WdErrorValue, ELEMENT_KEY};

/// One live WebDriver session against a running driver.
pub struct WebDriverSession {
    client: reqwest::Client,
    driver_url: String,
    session_id: String,
    poll_interval: Duration,
}

impl WebDriverSession {
    /// Create a browser session against the configured driver endpoint.
    ///
    /// The Chrome profile directory is persisted so WhatsApp Web pairing
    /// survives restarts.
    pub async fn connect(
        browser: &BrowserConfig,
        data_dir: &str,
        poll_interval: Duration,
    ) -> Result<Self, WabulkError> {
        let client = reqwest::Client::new();
        let profile_dir = browser.resolved_profile_dir(data_dir);
        let _ = std::fs::create_dir_all(&profile_dir);

        let body = chrome_capabilities(&profile_dir, browser.headless);
        let resp = client
            .post(format!("{}/session", browser.webdriver_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                WabulkError::Session(format!(
                    "webdriver unreachable at {}: {e}",
                    browser.webdriver_url
                ))
            })?;

        let value = parse_response(resp).await?;
        let session_id = value
            .get("sessionId")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                WabulkError::Session("webdriver returned no sessionId".into())
            })?
            .to_string();

        if let Some(version) = value
            .pointer("/capabilities/browserVersion")
            .and_then(|v| v.as_str())
        {
            info!("browser session {session_id} started (Chrome {version})");
            if let Some(major) = chrome_major_version(version) {
                if major < 60 {
                    warn!("Chrome {version} is below 60; WhatsApp Web requires Chrome 60+");
                }
            }
        } else {
            info!("browser session {session_id} started");
        }

        Ok(Self {
            client,
            driver_url: browser.webdriver_url.clone(),
            session_id,
            poll_interval,
        })
    }

    fn session_url(&self, path: &str) -> String {
        format!("{}/session/{}{path}", self.driver_url, self.session_id)
    }

    /// POST a command under the current session and return the `value` field.
    async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, WabulkError> {
        let resp = self
            .client
            .post(self.session_url(path))
            .json(&body)
            .send()
            .await
            .map_err(|e| WabulkError::Session(format!("webdriver request failed: {e}")))?;
        parse_response(resp).await
    }

    /// Locate an element, returning `None` when it is simply not there yet.
    /// Any other driver error propagates.
    async fn find_element_raw(
        &self,
        selector: &str,
    ) -> Result<Option<ElementHandle>, WabulkError> {
        let body = json!({ "using": "css selector", "value": selector });
        match self.post("/element", body).await {
            Ok(value) => {
                let id = value.get(ELEMENT_KEY).and_then(|v| v.as_str()).ok_or_else(
                    || WabulkError::Element(format!("malformed element response for '{selector}'")),
                )?;
                Ok(Some(ElementHandle(id.to_string())))
            }
            Err(WabulkError::Element(msg)) if msg.starts_with("no such element") => {
                debug!("element '{selector}' not present yet");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub(crate) fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

/// Parse a WebDriver response: `value` on success, a classified error on a
/// non-2xx status.
async fn parse_response(resp: reqwest::Response) -> Result<serde_json::Value, WabulkError> {
    let status = resp.status();
    let body: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| WabulkError::Session(format!("webdriver response parse failed: {e}")))?;

    if status.is_success() {
        return Ok(body.get("value").cloned().unwrap_or(serde_json::Value::Null));
    }

    let err: WdErrorValue = serde_json::from_value(body.get("value").cloned().unwrap_or_default())
        .unwrap_or_else(|_| WdErrorValue {
            error: "unknown error".into(),
            message: format!("webdriver returned HTTP {status}"),
        });
    Err(classify_error(&err))
}

/// Probe the driver's `/status` endpoint. `true` when it is ready to create
/// a new session.
pub async fn driver_status(driver_url: &str) -> bool {
    let Ok(resp) = reqwest::get(format!("{driver_url}/status")).await else {
        return false;
    };
    let Ok(body) = resp.json::<serde_json::Value>().await else {
        return false;
    };
    body.pointer("/value/ready")
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Extract the major version from a `browserVersion` capability string.
pub(crate) fn chrome_major_version(version: &str) -> Option<u32> {
    version.split('.').next()?.parse().ok()
}
