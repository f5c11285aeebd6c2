//! `BrowserSession` trait implementation over the WebDriver wire client.

use super::wire::ENTER_KEY;
use super::{parse_response, WebDriverSession};
use async_trait::async_trait;
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use wabulk_core::error::WabulkError;
use wabulk_core::session::{BrowserSession, ElementHandle};

#[async_trait]
impl BrowserSession for WebDriverSession {
    async fn navigate(&self, url: &str) -> Result<(), WabulkError> {
        debug!("navigate {url}");
        self.post("/url", json!({ "url": url })).await.map(|_| ())
    }

    /// Bounded polling instead of a fixed sleep: check for the element every
    /// poll interval until the deadline passes.
    async fn wait_for_element(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<ElementHandle, WabulkError> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(element) = self.find_element_raw(selector).await? {
                return Ok(element);
            }
            if Instant::now() >= deadline {
                return Err(WabulkError::ElementTimeout {
                    selector: selector.to_string(),
                    waited_secs: timeout.as_secs(),
                });
            }
            tokio::time::sleep(self.poll_interval()).await;
        }
    }

    async fn find_element(&self, selector: &str) -> Result<ElementHandle, WabulkError> {
        self.find_element_raw(selector)
            .await?
            .ok_or_else(|| WabulkError::Element(format!("no such element: '{selector}'")))
    }

    async fn click(&self, element: &ElementHandle) -> Result<(), WabulkError> {
        self.post(&format!("/element/{}/click", element.id()), json!({}))
            .await
            .map(|_| ())
    }

    async fn send_input(&self, element: &ElementHandle, text: &str) -> Result<(), WabulkError> {
        self.post(
            &format!("/element/{}/value", element.id()),
            json!({ "text": text }),
        )
        .await
        .map(|_| ())
    }

    async fn submit(&self, element: &ElementHandle) -> Result<(), WabulkError> {
        self.send_input(element, ENTER_KEY).await
    }

    async fn quit(&self) -> Result<(), WabulkError> {
        let resp = self
            .client
            .delete(self.session_url(""))
            .send()
            .await
            .map_err(|e| WabulkError::Session(format!("webdriver request failed: {e}")))?;
        parse_response(resp).await?;
        info!("browser session {} closed", self.session_id());
        Ok(())
    }
}
