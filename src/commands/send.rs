use console::style;
use std::path::PathBuf;
use tracing::info;
use wabulk_browser::{login, WebDriverSession};
use wabulk_contacts::ContactStore;
use wabulk_core::config::Config;
use wabulk_core::job::SendJob;
use wabulk_core::session::BrowserSession;
use wabulk_sender::{run as run_workflow, CancelFlag};

/// Assemble a job from the contact list plus ad-hoc numbers and run it.
pub async fn run(
    cfg: &Config,
    message: String,
    media: Option<PathBuf>,
    contacts: Option<String>,
    numbers: Vec<String>,
) -> anyhow::Result<()> {
    let path = super::contacts_path(cfg, contacts.as_deref());

    let mut store = if std::path::Path::new(&path).exists() {
        let (store, summary) = ContactStore::load_csv(&path)?;
        info!(
            "loaded {} contact(s) from {path} ({} skipped)",
            summary.imported, summary.skipped
        );
        store
    } else if contacts.is_some() {
        anyhow::bail!("contacts file not found: {path}");
    } else {
        ContactStore::new()
    };

    for number in &numbers {
        store.add(None, number)?;
    }

    if store.is_empty() {
        anyhow::bail!("no targets: import contacts or pass --number");
    }

    // Validation happens here, before the browser is ever touched.
    let job = SendJob::new(message, media, store.targets())?;

    let mut session = WebDriverSession::connect(
        &cfg.browser,
        &cfg.wabulk.data_dir,
        cfg.timeouts.poll_interval(),
    )
    .await?;

    if let Err(e) = login::wait_for_login(
        &session,
        &cfg.browser.base_url,
        cfg.timeouts.login_wait(),
    )
    .await
    {
        let _ = session.quit().await;
        return Err(e.into());
    }

    // Ctrl-C stops between targets; the in-flight target finishes first.
    let cancel = CancelFlag::new();
    let cancel_on_sigint = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_on_sigint.cancel();
        }
    });

    println!(
        "Sending to {} target(s) — Ctrl-C stops after the current one",
        job.targets.len()
    );
    let report =
        run_workflow(&job, &mut session, &cfg.browser.base_url, &cfg.timeouts, &cancel).await;
    let _ = session.quit().await;

    for result in &report.results {
        if result.is_success() {
            println!("  {} {}", style("✓").green(), result.number);
        } else {
            println!(
                "  {} {} — {}",
                style("✗").red(),
                result.number,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    store.apply_report(&report.results);
    println!(
        "\n{} submitted, {} failed (submitted ≠ delivered: delivery is not confirmed)",
        report.sent(),
        report.failed()
    );

    if let Some(reason) = &report.fatal {
        anyhow::bail!("batch aborted early, browser session lost: {reason}");
    }
    Ok(())
}
