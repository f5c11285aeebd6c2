//! Sequential send loop with per-target failure isolation.
//!
//! One bad number must never poison the batch: every per-target error is
//! caught, recorded, and the loop moves on. The single exception is a dead
//! session, which fails the rest of the batch at once since no further
//! target can succeed.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use wabulk_core::config::TimeoutConfig;
use wabulk_core::error::WabulkError;
use wabulk_core::job::{SendJob, SendResult};
use wabulk_core::selectors;
use wabulk_core::session::BrowserSession;

/// Failure reason recorded when the session dies mid-batch.
const SESSION_UNAVAILABLE: &str = "session unavailable";

/// Failure reason recorded for targets skipped after cancellation.
const CANCELLED: &str = "cancelled";

/// Error recorded when the compose box never appeared.
const COMPOSE_NOT_FOUND: &str = "compose box not found";

/// Externally signalled cancellation. Observed between targets only —
/// cancelling a live browser action mid-step has undefined interaction with
/// the external session.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Outcome of a whole run: one result per target, in input order, plus the
/// fatal session reason if the batch was cut short.
#[derive(Debug, Clone)]
pub struct SendReport {
    pub results: Vec<SendResult>,
    /// Set when the browser session became unusable; the remaining targets
    /// were recorded as failed without being attempted.
    pub fatal: Option<String>,
}

impl SendReport {
    pub fn sent(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.sent()
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal.is_some()
    }
}

/// Per-target progress states. Terminal states are the result outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetState {
    Navigating,
    AwaitingComposeBox,
    AttachingMedia,
    Composing,
    Submitted,
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Navigating => "navigating",
            Self::AwaitingComposeBox => "awaiting-compose-box",
            Self::AttachingMedia => "attaching-media",
            Self::Composing => "composing",
            Self::Submitted => "submitted",
        };
        f.write_str(s)
    }
}

/// Run a send job through an already-authenticated browser session.
///
/// Targets are processed strictly in input order over the one shared
/// session; results come back in the same order, one per target, even when
/// targets fail. The exclusive borrow enforces that at most one run holds
/// the session at a time. "Success" means the submit action was issued
/// without an immediate error — actual delivery is never confirmed.
pub async fn run(
    job: &SendJob,
    session: &mut dyn BrowserSession,
    base_url: &str,
    timeouts: &TimeoutConfig,
    cancel: &CancelFlag,
) -> SendReport {
    let mut results = Vec::with_capacity(job.targets.len());
    let mut fatal = None;
    let total = job.targets.len();

    info!(job = %job.id, targets = total, "starting bulk send");

    let mut targets = job.targets.iter();
    while let Some(target) = targets.next() {
        let number = target.number.as_str();

        if cancel.is_cancelled() {
            info!("send cancelled, skipping {number} and the rest of the batch");
            results.push(SendResult::failure(number, CANCELLED));
            results.extend(
                targets.map(|t| SendResult::failure(t.number.as_str(), CANCELLED)),
            );
            break;
        }

        match send_one(job, session, base_url, timeouts, number).await {
            Ok(()) => {
                debug!("{number}: submitted");
                results.push(SendResult::success(number));
            }
            Err(WabulkError::Session(reason)) => {
                // No further target can succeed on a dead session; fail the
                // rest of the batch in order and surface the reason.
                warn!("session lost while sending to {number}: {reason}");
                results.push(SendResult::failure(number, SESSION_UNAVAILABLE));
                results.extend(
                    targets.map(|t| SendResult::failure(t.number.as_str(), SESSION_UNAVAILABLE)),
                );
                fatal = Some(reason);
                break;
            }
            Err(WabulkError::Element(msg)) => {
                warn!("failed to send to {number}: {msg}");
                results.push(SendResult::failure(number, msg));
            }
            Err(err) => {
                warn!("failed to send to {number}: {err}");
                results.push(SendResult::failure(number, err.to_string()));
            }
        }
    }

    let report = SendReport { results, fatal };
    info!(
        job = %job.id,
        sent = report.sent(),
        failed = report.failed(),
        "bulk send finished"
    );
    report
}

/// Drive one target through the state machine. Any error here fails only
/// this target, except a session error which the caller escalates.
async fn send_one(
    job: &SendJob,
    session: &dyn BrowserSession,
    base_url: &str,
    timeouts: &TimeoutConfig,
    number: &str,
) -> Result<(), WabulkError> {
    let mut state = TargetState::Navigating;
    debug!("{number}: {state}");
    let url = selectors::chat_url(base_url, number, Some(&job.message));
    session.navigate(&url).await?;

    state = TargetState::AwaitingComposeBox;
    debug!("{number}: {state}");
    let compose = session
        .wait_for_element(selectors::COMPOSE_BOX, timeouts.compose_wait())
        .await
        .map_err(|err| match err {
            WabulkError::ElementTimeout { .. } => {
                WabulkError::Element(COMPOSE_NOT_FOUND.to_string())
            }
            other => other,
        })?;

    if let Some(media) = &job.media_path {
        if media.exists() {
            state = TargetState::AttachingMedia;
            debug!("{number}: {state}");
            let attach = session.find_element(selectors::ATTACH_BUTTON).await?;
            session.click(&attach).await?;
            let file_input = session.find_element(selectors::FILE_INPUT).await?;
            session
                .send_input(&file_input, &media.to_string_lossy())
                .await?;
            // Settle: give the upload a moment to start.
            tokio::time::sleep(timeouts.settle()).await;
        } else {
            // Missing media is tolerated, not a failure.
            debug!(
                "{number}: media path {} does not exist, skipping attachment",
                media.display()
            );
        }
    }

    state = TargetState::Composing;
    debug!("{number}: {state}");
    session.send_input(&compose, &job.message).await?;
    session.submit(&compose).await?;

    state = TargetState::Submitted;
    debug!("{number}: {state}");
    // Settle: let the submit take effect. No delivery confirmation happens.
    tokio::time::sleep(timeouts.settle()).await;

    Ok(())
}
