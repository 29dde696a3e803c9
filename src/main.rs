use anyhow::{Context, Result};
use animation_playground::ui::{self, AppState};
use animation_playground::{PlaygroundConfig, PresetStore};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let config = PlaygroundConfig::load_or_default().context("loading configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;
    info!("Starting Animation Playground");

    let (store, problem) = if config.in_memory {
        (PresetStore::in_memory(), None)
    } else {
        match PresetStore::open_or_recover(&config.store_path) {
            Ok(opened) => opened,
            Err(e) => {
                warn!(
                    "Could not open {}: {}; presets will not be saved",
                    config.store_path.display(),
                    e
                );
                (PresetStore::in_memory(), Some(e))
            }
        }
    };

    let mut state = AppState::new(store);
    state.seed_on_start = config.seed_on_start;
    state.last_error = problem.map(|e| e.user_message());

    ui::run(config, state).map_err(|e| anyhow::anyhow!("{}", e))
}
