//! Wire types and helpers for the WebDriver protocol.

use serde::Deserialize;
use serde_json::json;
use wabulk_core::error::WabulkError;

/// W3C element identifier key in element responses.
pub(crate) const ELEMENT_KEY: &str = "element-6066-11e4-a852-e17c814bedc7";

/// Key sequence for the Enter key (WebDriver "keys" codepoint).
pub(crate) const ENTER_KEY: &str = "\u{E007}";

/// Error payload of a failed WebDriver command.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct WdErrorValue {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}

/// Driver errors that mean the session itself is gone. Everything else is an
/// element-level problem that only fails the current target.
const SESSION_FATAL: &[&str] = &[
    "invalid session id",
    "session not created",
    "no such window",
    "unexpected alert open",
];

/// Map a driver error onto the wabulk error taxonomy.
pub(crate) fn classify_error(err: &WdErrorValue) -> WabulkError {
    if SESSION_FATAL.contains(&err.error.as_str()) {
        WabulkError::Session(format!("{}: {}", err.error, err.message))
    } else {
        WabulkError::Element(format!("{}: {}", err.error, err.message))
    }
}

/// New-session capabilities for Chrome with a persistent profile.
pub(crate) fn chrome_capabilities(profile_dir: &str, headless: bool) -> serde_json::Value {
    let mut args = vec![
        "--start-maximized".to_string(),
        format!("--user-data-dir={profile_dir}"),
    ];
    if headless {
        args.push("--headless=new".to_string());
    }
    json!({
        "capabilities": {
            "alwaysMatch": {
                "browserName": "chrome",
                "goog:chromeOptions": { "args": args }
            }
        }
    })
}
