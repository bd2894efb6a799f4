pub mod error;
pub mod extract;
pub mod image;
pub mod parse;
pub mod search;
pub mod session;

pub use error::ScraperError;
pub use search::WildberriesScraper;
pub use session::{BrowserSession, SessionConfig};
