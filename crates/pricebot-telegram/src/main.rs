use std::sync::Arc;

use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use pricebot_scraper::{SessionConfig, WildberriesScraper};
use pricebot_telegram::{bot, BotApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = pricebot_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let token = config
        .bot_token
        .clone()
        .ok_or_else(|| pricebot_core::ConfigError::MissingEnvVar("TELEGRAM_BOT_TOKEN".to_string()))?;

    let api = BotApi::new(&token)?;
    let scraper = Arc::new(Mutex::new(WildberriesScraper::new(
        SessionConfig::from_app_config(&config),
    )));

    tokio::select! {
        result = bot::run_bot(api, Arc::clone(&scraper), config) => result?,
        () = shutdown_signal() => {
            tracing::info!("shutdown signal received");
        }
    }

    scraper.lock().await.dispose().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
