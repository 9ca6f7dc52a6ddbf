//! Restaurant records entry point.

use app::config::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn run(config: &Config) -> app::error::Result<()> {
    let (model, _source) = app::load_model(config)?;
    app::log_summary(&model);
    app::save_model(config, &model)
}

fn main() {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Load, summarize, save
    tracing::info!(path = %config.data_file.display(), "starting");
    if let Err(error) = run(&config) {
        tracing::error!(%error, "failed");
        std::process::exit(1);
    }
    tracing::info!("done");
}
