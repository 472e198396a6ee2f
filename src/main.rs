use anyhow::Result;
use citybrief::config::{CityBriefConfig, LoggingConfig};
use citybrief::web;
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = CityBriefConfig::load()?;
    init_tracing(&config.logging);
    tracing::info!("Starting citybrief {}", citybrief::VERSION);

    web::run(config).await
}
