/// Default desktop user-agent presented by the headless browser.
///
/// A stable, ordinary Chrome-on-Windows string; the target site serves the
/// desktop markup variant for it.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Clone)]
pub struct AppConfig {
    /// Telegram bot token; only the telegram binary requires it.
    pub bot_token: Option<String>,
    pub log_level: String,
    /// Run the browser without a visible window.
    pub headless: bool,
    pub window_width: u32,
    pub window_height: u32,
    pub user_agent: String,
    /// Upper bound on waiting for the results marker to render.
    pub render_timeout_secs: u64,
    /// Extra wait after the marker appears, absorbing late async content.
    pub settle_delay_secs: u64,
    /// Maximum number of result cards extracted per query.
    pub result_limit: usize,
    /// Queries shorter than this are rejected by the front-end.
    pub min_query_len: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[redacted]"))
            .field("log_level", &self.log_level)
            .field("headless", &self.headless)
            .field("window_width", &self.window_width)
            .field("window_height", &self.window_height)
            .field("user_agent", &self.user_agent)
            .field("render_timeout_secs", &self.render_timeout_secs)
            .field("settle_delay_secs", &self.settle_delay_secs)
            .field("result_limit", &self.result_limit)
            .field("min_query_len", &self.min_query_len)
            .finish()
    }
}
