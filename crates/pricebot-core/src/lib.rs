pub mod app_config;
pub mod compare;
pub mod config;
pub mod product;

use thiserror::Error;

pub use app_config::AppConfig;
pub use compare::{cheapest, rank, ranked_summary};
pub use config::{load_app_config, load_app_config_from_env};
pub use product::Product;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
