use super::*;
use std::time::Duration;

#[test]
fn test_defaults_when_empty() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.wabulk.data_dir, "~/.wabulk");
    assert_eq!(config.wabulk.log_level, "info");
    assert_eq!(config.browser.webdriver_url, "http://127.0.0.1:9515");
    assert_eq!(config.browser.base_url, "https://web.whatsapp.com");
    assert!(!config.browser.headless);
    assert_eq!(config.timeouts.compose_wait_secs, 20);
    assert_eq!(config.timeouts.login_wait_secs, 60);
    assert_eq!(config.timeouts.settle_secs, 2);
}

#[test]
fn test_partial_override() {
    let toml = r#"
        [timeouts]
        compose_wait_secs = 5

        [browser]
        headless = true
    "#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.timeouts.compose_wait_secs, 5);
    // Untouched fields keep their defaults.
    assert_eq!(config.timeouts.login_wait_secs, 60);
    assert!(config.browser.headless);
    assert_eq!(config.browser.base_url, "https://web.whatsapp.com");
}

#[test]
fn test_timeout_durations() {
    let timeouts = TimeoutConfig::default();
    assert_eq!(timeouts.compose_wait(), Duration::from_secs(20));
    assert_eq!(timeouts.login_wait(), Duration::from_secs(60));
    assert_eq!(timeouts.settle(), Duration::from_secs(2));
    assert_eq!(timeouts.poll_interval(), Duration::from_millis(250));
}

#[test]
fn test_profile_dir_fallback() {
    let browser = BrowserConfig::default();
    let dir = browser.resolved_profile_dir("/tmp/wabulk");
    assert_eq!(dir, "/tmp/wabulk/browser_profile");

    let browser = BrowserConfig {
        profile_dir: "/opt/profile".to_string(),
        ..Default::default()
    };
    assert_eq!(browser.resolved_profile_dir("/tmp/wabulk"), "/opt/profile");
}

#[test]
fn test_shellexpand_home() {
    std::env::set_var("HOME", "/home/tester");
    assert_eq!(shellexpand("~/x/y"), "/home/tester/x/y");
    assert_eq!(shellexpand("/abs/path"), "/abs/path");
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let config = load("/nonexistent/wabulk-config.toml").unwrap();
    assert_eq!(config.timeouts.compose_wait_secs, 20);
}
