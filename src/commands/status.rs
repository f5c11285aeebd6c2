use wabulk_browser::driver_status;
use wabulk_contacts::ContactStore;
use wabulk_core::config::Config;

/// Report driver reachability and configuration health.
pub async fn run(config_path: &str, cfg: &Config) -> anyhow::Result<()> {
    println!("wabulk — Status Check\n");
    println!("Config: {config_path}");
    println!("WhatsApp Web: {}", cfg.browser.base_url);
    println!();

    let ready = driver_status(&cfg.browser.webdriver_url).await;
    println!(
        "  webdriver ({}): {}",
        cfg.browser.webdriver_url,
        if ready { "ready" } else { "not reachable" }
    );

    let contacts = super::contacts_path(cfg, None);
    match ContactStore::load_csv(&contacts) {
        Ok((store, _)) => println!("  contacts ({contacts}): {} entries", store.len()),
        Err(_) => println!("  contacts ({contacts}): not found"),
    }

    println!(
        "  timeouts: compose {}s, login {}s, settle {}s",
        cfg.timeouts.compose_wait_secs, cfg.timeouts.login_wait_secs, cfg.timeouts.settle_secs
    );
    Ok(())
}
