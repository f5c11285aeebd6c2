//! # wabulk-browser
//!
//! Drives a real browser against WhatsApp Web through the W3C WebDriver
//! protocol (JSON over HTTP, e.g. chromedriver on port 9515).
//!
//! DOM selectors are version-dependent and inherently fragile, so every
//! selector string lives in `wabulk_core::selectors` and nowhere else.

pub mod login;
pub mod webdriver;

pub use webdriver::{driver_status, WebDriverSession};
