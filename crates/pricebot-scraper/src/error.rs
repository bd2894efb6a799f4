use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("invalid browser configuration: {reason}")]
    BrowserConfig { reason: String },

    #[error("browser protocol error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error("render wait timed out after {timeout_secs}s: no \"{marker}\" on {url}")]
    RenderTimeout {
        url: String,
        marker: String,
        timeout_secs: u64,
    },
}
