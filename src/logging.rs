use crate::config::LoggingConfig;
use crate::error::{AppError, AppResult};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn filter_directive(config: &LoggingConfig) -> String {
    format!("legalai={level},eframe=warn,egui=warn,{level}", level = config.level)
}

/// `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(config)))
        .map_err(|err| AppError::Logging(err.to_string()))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
