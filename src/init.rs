//! Init wizard — interactive first-run setup with cliclack styled prompts.

use std::path::Path;
use wabulk_browser::driver_status;
use wabulk_core::config::Config;
use wabulk_core::shellexpand;

/// Run the interactive init wizard: create the data directory, probe the
/// WebDriver endpoint, and scaffold `config.toml`.
pub async fn run(config_path: &str) -> anyhow::Result<()> {
    cliclack::intro("wabulk init")?;

    let mut cfg = Config::default();

    // 1. Data directory (browser profile lives under it).
    let data_dir = shellexpand(&cfg.wabulk.data_dir);
    if !Path::new(&data_dir).exists() {
        std::fs::create_dir_all(&data_dir)?;
        cliclack::log::success(format!("{data_dir} — created"))?;
    } else {
        cliclack::log::success(format!("{data_dir} — exists"))?;
    }

    // 2. WebDriver endpoint.
    let webdriver_url: String = cliclack::input("WebDriver endpoint")
        .default_input(&cfg.browser.webdriver_url)
        .interact()?;
    cfg.browser.webdriver_url = webdriver_url;

    let spinner = cliclack::spinner();
    spinner.start("Checking WebDriver endpoint...");
    if driver_status(&cfg.browser.webdriver_url).await {
        spinner.stop("webdriver — ready");
    } else {
        spinner.error("webdriver — NOT REACHABLE");
        cliclack::note(
            "Start chromedriver",
            "Install a chromedriver matching your Chrome version and run:\n\n    chromedriver --port=9515\n\nThen run 'wabulk init' again, or continue and start it before sending.",
        )?;
    }

    // 3. Contacts file.
    let contacts_path: String = cliclack::input("Contacts CSV path")
        .default_input(&cfg.contacts.path)
        .interact()?;
    cfg.contacts.path = contacts_path;

    // 4. Write config.toml (never overwrite an existing one).
    if Path::new(config_path).exists() {
        cliclack::log::info(format!("{config_path} already exists — leaving it untouched"))?;
    } else {
        let toml = toml::to_string_pretty(&cfg)?;
        std::fs::write(config_path, toml)?;
        cliclack::log::success(format!("{config_path} — written"))?;
    }

    cliclack::note(
        "Next steps",
        "1. wabulk login            # scan the QR code once\n2. wabulk contacts import <file.csv>\n3. wabulk send -m \"hello\"",
    )?;
    cliclack::outro("Setup complete")?;
    Ok(())
}
