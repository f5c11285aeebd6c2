use crate::workflow::{run, CancelFlag};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use wabulk_core::config::TimeoutConfig;
use wabulk_core::contact::Contact;
use wabulk_core::error::WabulkError;
use wabulk_core::job::{SendJob, SendOutcome};
use wabulk_core::selectors;
use wabulk_core::session::{BrowserSession, ElementHandle};

const BASE: &str = "https://web.whatsapp.com";

/// What the mock does for a given target number.
#[derive(Clone, Copy, PartialEq)]
enum Behavior {
    Succeed,
    /// Compose box never appears.
    ComposeTimeout,
    /// Navigation blows up with a session-level error.
    SessionDead,
    /// Succeed, then trip the cancel flag on submit.
    CancelAfterSubmit,
}

/// Scripted in-memory session: no browser, no sleeps.
struct MockSession {
    behaviors: HashMap<String, Behavior>,
    calls: Mutex<Vec<String>>,
    current: Mutex<Option<String>>,
    cancel: CancelFlag,
}

impl MockSession {
    fn new(behaviors: &[(&str, Behavior)], cancel: CancelFlag) -> Self {
        Self {
            behaviors: behaviors
                .iter()
                .map(|(n, b)| (n.to_string(), *b))
                .collect(),
            calls: Mutex::new(Vec::new()),
            current: Mutex::new(None),
            cancel,
        }
    }

    fn log(&self, entry: impl Into<String>) {
        self.calls.lock().unwrap().push(entry.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn behavior(&self) -> Behavior {
        let current = self.current.lock().unwrap();
        current
            .as_deref()
            .and_then(|n| self.behaviors.get(n).copied())
            .unwrap_or(Behavior::Succeed)
    }

    /// Pull the phone number out of a deep-link URL.
    fn number_of(url: &str) -> Option<String> {
        let rest = url.split("phone=").nth(1)?;
        Some(rest.split('&').next()?.to_string())
    }
}

#[async_trait]
impl BrowserSession for MockSession {
    async fn navigate(&self, url: &str) -> Result<(), WabulkError> {
        self.log(format!("navigate:{url}"));
        *self.current.lock().unwrap() = Self::number_of(url);
        if self.behavior() == Behavior::SessionDead {
            return Err(WabulkError::Session("browser crashed".into()));
        }
        Ok(())
    }

    async fn wait_for_element(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<ElementHandle, WabulkError> {
        self.log(format!("wait:{selector}"));
        if selector == selectors::COMPOSE_BOX && self.behavior() == Behavior::ComposeTimeout {
            return Err(WabulkError::ElementTimeout {
                selector: selector.to_string(),
                waited_secs: timeout.as_secs(),
            });
        }
        Ok(ElementHandle(format!("el-{selector}")))
    }

    async fn find_element(&self, selector: &str) -> Result<ElementHandle, WabulkError> {
        self.log(format!("find:{selector}"));
        Ok(ElementHandle(format!("el-{selector}")))
    }

    async fn click(&self, element: &ElementHandle) -> Result<(), WabulkError> {
        self.log(format!("click:{}", element.id()));
        Ok(())
    }

    async fn send_input(&self, element: &ElementHandle, text: &str) -> Result<(), WabulkError> {
        self.log(format!("input:{}:{text}", element.id()));
        Ok(())
    }

    async fn submit(&self, _element: &ElementHandle) -> Result<(), WabulkError> {
        self.log("submit");
        if self.behavior() == Behavior::CancelAfterSubmit {
            self.cancel.cancel();
        }
        Ok(())
    }

    async fn quit(&self) -> Result<(), WabulkError> {
        self.log("quit");
        Ok(())
    }
}

/// Zero settle and poll so tests never sleep.
fn fast_timeouts() -> TimeoutConfig {
    TimeoutConfig {
        compose_wait_secs: 20,
        login_wait_secs: 60,
        settle_secs: 0,
        poll_interval_ms: 0,
    }
}

fn job_for(numbers: &[&str], message: &str) -> SendJob {
    let targets = numbers.iter().map(|n| Contact::new(None, *n)).collect();
    SendJob::new(message, None, targets).unwrap()
}

#[tokio::test]
async fn test_one_result_per_target_in_order() {
    let cancel = CancelFlag::new();
    let mut session = MockSession::new(&[], cancel.clone());
    let job = job_for(&["+1", "+2", "+3"], "hello");

    let report = run(&job, &mut session, BASE, &fast_timeouts(), &cancel).await;

    assert_eq!(report.results.len(), 3);
    let numbers: Vec<_> = report.results.iter().map(|r| r.number.as_str()).collect();
    assert_eq!(numbers, vec!["+1", "+2", "+3"]);
    assert!(report.results.iter().all(|r| r.is_success()));
    assert!(!report.is_fatal());
    assert_eq!(report.sent(), 3);
}

#[tokio::test]
async fn test_compose_timeout_fails_one_target_only() {
    let cancel = CancelFlag::new();
    let mut session = MockSession::new(&[("+2", Behavior::ComposeTimeout)], cancel.clone());
    let job = job_for(&["+1", "+2", "+3"], "hello");

    let report = run(&job, &mut session, BASE, &fast_timeouts(), &cancel).await;

    assert_eq!(report.results.len(), 3);
    assert_eq!(report.results[0].outcome, SendOutcome::Success);
    assert_eq!(report.results[1].outcome, SendOutcome::Failure);
    assert_eq!(
        report.results[1].error.as_deref(),
        Some("compose box not found")
    );
    // The failure did not abort the batch.
    assert_eq!(report.results[2].outcome, SendOutcome::Success);
    assert!(!report.is_fatal());
}

#[tokio::test]
async fn test_session_error_fails_rest_of_batch() {
    let cancel = CancelFlag::new();
    let mut session = MockSession::new(&[("+2", Behavior::SessionDead)], cancel.clone());
    let job = job_for(&["+1", "+2", "+3", "+4"], "hello");

    let report = run(&job, &mut session, BASE, &fast_timeouts(), &cancel).await;

    assert_eq!(report.results.len(), 4);
    assert!(report.results[0].is_success());
    for result in &report.results[1..] {
        assert_eq!(result.outcome, SendOutcome::Failure);
        assert_eq!(result.error.as_deref(), Some("session unavailable"));
    }
    assert_eq!(report.fatal.as_deref(), Some("browser crashed"));

    // Targets after the dead one were never attempted.
    let navigations = session
        .calls()
        .iter()
        .filter(|c| c.starts_with("navigate:"))
        .count();
    assert_eq!(navigations, 2);
}

#[test]
fn test_invalid_job_never_reaches_the_session() {
    // Validation happens at construction, before any navigation.
    assert!(matches!(
        SendJob::new("", None, vec![Contact::new(None, "+1")]),
        Err(WabulkError::Validation(_))
    ));
    assert!(matches!(
        SendJob::new("hello", None, vec![]),
        Err(WabulkError::Validation(_))
    ));
}

#[tokio::test]
async fn test_cancellation_between_targets() {
    let cancel = CancelFlag::new();
    let mut session = MockSession::new(&[("+1", Behavior::CancelAfterSubmit)], cancel.clone());
    let job = job_for(&["+1", "+2", "+3"], "hello");

    let report = run(&job, &mut session, BASE, &fast_timeouts(), &cancel).await;

    assert_eq!(report.results.len(), 3);
    assert!(report.results[0].is_success());
    assert_eq!(report.results[1].error.as_deref(), Some("cancelled"));
    assert_eq!(report.results[2].error.as_deref(), Some("cancelled"));

    // Only the first target was navigated to.
    let navigations = session
        .calls()
        .iter()
        .filter(|c| c.starts_with("navigate:"))
        .count();
    assert_eq!(navigations, 1);
}

#[tokio::test]
async fn test_message_is_typed_and_submitted() {
    let cancel = CancelFlag::new();
    let mut session = MockSession::new(&[], cancel.clone());
    let job = job_for(&["+1"], "Hello World");

    run(&job, &mut session, BASE, &fast_timeouts(), &cancel).await;

    let calls = session.calls();
    // Deep link carries the encoded message.
    assert!(calls[0].contains("phone=+1"));
    assert!(calls[0].contains("text=Hello%20World"));
    // The message is also typed into the compose box, then submitted.
    assert!(calls.iter().any(|c| c.starts_with("input:") && c.ends_with(":Hello World")));
    assert_eq!(calls.last().map(String::as_str), Some("submit"));
}

#[tokio::test]
async fn test_media_attached_when_path_exists() {
    let dir = tempfile::tempdir().unwrap();
    let media = dir.path().join("photo.png");
    std::fs::write(&media, b"png").unwrap();

    let cancel = CancelFlag::new();
    let mut session = MockSession::new(&[], cancel.clone());
    let targets = vec![Contact::new(None, "+1")];
    let job = SendJob::new("hello", Some(media.clone()), targets).unwrap();

    let report = run(&job, &mut session, BASE, &fast_timeouts(), &cancel).await;

    assert!(report.results[0].is_success());
    let calls = session.calls();
    assert!(calls.iter().any(|c| c == &format!("find:{}", selectors::ATTACH_BUTTON)));
    assert!(calls
        .iter()
        .any(|c| c.contains(selectors::FILE_INPUT) && c.starts_with("find:")));
    let media_str = media.to_string_lossy().to_string();
    assert!(calls.iter().any(|c| c.starts_with("input:") && c.ends_with(&media_str)));
}

#[tokio::test]
async fn test_missing_media_is_skipped_silently() {
    let cancel = CancelFlag::new();
    let mut session = MockSession::new(&[], cancel.clone());
    let targets = vec![Contact::new(None, "+1")];
    let job = SendJob::new(
        "hello",
        Some(std::path::PathBuf::from("/nonexistent/photo.png")),
        targets,
    )
    .unwrap();

    let report = run(&job, &mut session, BASE, &fast_timeouts(), &cancel).await;

    // Still a success: missing media is tolerated.
    assert!(report.results[0].is_success());
    let calls = session.calls();
    assert!(!calls
        .iter()
        .any(|c| c.contains(selectors::ATTACH_BUTTON)));
}
