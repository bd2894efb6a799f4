//! Lifetime management for the headless Chromium session.
//!
//! One `BrowserSession` owns at most one browser process: lazily launched on
//! first use, reused across queries, explicitly disposed at shutdown. The
//! session is not safe for concurrent navigations — callers serialize access
//! (the Telegram front-end holds the scraper behind a mutex).

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use pricebot_core::app_config::DEFAULT_USER_AGENT;
use pricebot_core::AppConfig;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::ScraperError;

/// How often the render wait re-checks for the ready marker.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Browser-level knobs; all have production defaults.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub headless: bool,
    pub window_width: u32,
    pub window_height: u32,
    pub user_agent: String,
    /// Upper bound on waiting for the ready marker.
    pub render_timeout: Duration,
    /// Fixed extra wait after the marker appears, absorbing scripts that
    /// populate content late.
    pub settle_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            render_timeout: Duration::from_secs(15),
            settle_delay: Duration::from_secs(3),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            headless: config.headless,
            window_width: config.window_width,
            window_height: config.window_height,
            user_agent: config.user_agent.clone(),
            render_timeout: Duration::from_secs(config.render_timeout_secs),
            settle_delay: Duration::from_secs(config.settle_delay_secs),
        }
    }
}

/// Owns the lifetime of a single headless browser instance.
pub struct BrowserSession {
    config: SessionConfig,
    browser: Option<Browser>,
    handler_task: Option<JoinHandle<()>>,
}

impl BrowserSession {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            browser: None,
            handler_task: None,
        }
    }

    /// Launches the browser if it is not already running. Idempotent: a live
    /// session makes this a no-op, so the process is created on first use
    /// rather than per query.
    ///
    /// # Errors
    ///
    /// [`ScraperError::BrowserConfig`] when the launch options are rejected,
    /// [`ScraperError::Cdp`] when the browser process cannot be started.
    pub async fn ensure_ready(&mut self) -> Result<(), ScraperError> {
        if self.browser.is_some() {
            return Ok(());
        }

        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg(format!("--user-agent={}", self.config.user_agent))
            .window_size(self.config.window_width, self.config.window_height);
        if !self.config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder
            .build()
            .map_err(|reason| ScraperError::BrowserConfig { reason })?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;

        // The handler stream drives the CDP connection and must be polled
        // for the browser to make progress.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        info!(
            headless = self.config.headless,
            width = self.config.window_width,
            height = self.config.window_height,
            "browser session started"
        );
        self.browser = Some(browser);
        self.handler_task = Some(handler_task);
        Ok(())
    }

    /// Navigates to `url`, waits until an element matching `ready_marker`
    /// renders (bounded by the configured timeout), applies the settle delay,
    /// and returns the page's HTML snapshot.
    ///
    /// # Errors
    ///
    /// [`ScraperError::RenderTimeout`] when the marker never appears;
    /// [`ScraperError::Cdp`] for navigation or snapshot failures. The session
    /// itself stays usable after either.
    pub async fn navigate_and_wait(
        &mut self,
        url: &str,
        ready_marker: &str,
    ) -> Result<String, ScraperError> {
        self.ensure_ready().await?;
        // ensure_ready either left a live browser behind or returned the
        // launch error above.
        let Some(browser) = self.browser.as_ref() else {
            return Err(ScraperError::BrowserConfig {
                reason: "browser not running after launch".to_string(),
            });
        };

        let page = browser.new_page(url).await?;
        let result = Self::await_marker_and_snapshot(&page, url, ready_marker, &self.config).await;
        if let Err(error) = page.close().await {
            debug!(%error, "page close failed (ignored)");
        }
        result
    }

    async fn await_marker_and_snapshot(
        page: &Page,
        url: &str,
        ready_marker: &str,
        config: &SessionConfig,
    ) -> Result<String, ScraperError> {
        let deadline = tokio::time::Instant::now() + config.render_timeout;
        loop {
            if page.find_element(ready_marker).await.is_ok() {
                break;
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(ScraperError::RenderTimeout {
                    url: url.to_string(),
                    marker: ready_marker.to_string(),
                    timeout_secs: config.render_timeout.as_secs(),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }

        // The marker shows up before late scripts finish populating cards.
        tokio::time::sleep(config.settle_delay).await;
        Ok(page.content().await?)
    }

    /// Shuts the browser down and stops the handler task. Safe to call when
    /// no session exists, and idempotent.
    pub async fn dispose(&mut self) {
        if let Some(mut browser) = self.browser.take() {
            if let Err(error) = browser.close().await {
                debug!(%error, "browser close failed (ignored)");
            }
            info!("browser session disposed");
        }
        if let Some(task) = self.handler_task.take() {
            task.abort();
        }
    }
}
