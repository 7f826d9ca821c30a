use std::{env, error::Error, io::stdout};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mailer_application::infrastructure_config::{Config, LogFormat, LoggingConfig};

pub type InitError = Box<dyn Error + Send + Sync>;

/// Installs the global subscriber. `RUST_LOG`, when it parses, overrides
/// `logging.level`.
pub fn setup_logging(config: &Config) -> Result<(), InitError> {
    let logging = &config.logging;
    let filter = filter_for(env::var("RUST_LOG").ok().as_deref(), &logging.level);

    match logging.format {
        LogFormat::Json => init_bunyan(logging, filter),
        LogFormat::Pretty => init_pretty(logging, filter),
    }
}

fn filter_for(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

fn init_bunyan(logging: &LoggingConfig, filter: EnvFilter) -> Result<(), InitError> {
    let formatting_layer = BunyanFormattingLayer::new(logging.service_name.clone(), stdout);

    tracing_subscriber::registry()
        .with(filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
        .try_init()?;

    Ok(())
}

fn init_pretty(logging: &LoggingConfig, filter: EnvFilter) -> Result<(), InitError> {
    let format = fmt::format()
        .with_target(true)
        .with_thread_ids(true)
        .compact();

    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(filter)
        .with_file(logging.include_location)
        .with_line_number(logging.include_location)
        .try_init()
}
