use engine::{LoopConfig, Scene};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use super::gameplay::{self, TileGridError};

const KEY_REPEAT_ENV_VAR: &str = "SOKOBAN_KEY_REPEAT";

#[derive(Debug, Error)]
pub(crate) enum StartupError {
    #[error("failed to build starting level: {0}")]
    Level(#[from] TileGridError),
}

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, StartupError> {
    init_tracing();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        "=== Sokoban Startup ==="
    );

    let scene = gameplay::build_scene()?;
    let defaults = LoopConfig::default();
    let config = LoopConfig {
        key_repeat: parse_key_repeat(std::env::var(KEY_REPEAT_ENV_VAR).ok(), defaults.key_repeat),
        ..defaults
    };

    Ok(AppWiring { config, scene })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

fn parse_key_repeat(raw: Option<String>, fallback: bool) -> bool {
    let Some(raw) = raw else {
        return fallback;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => true,
        "0" | "false" | "off" | "no" => false,
        other => {
            warn!(
                env_var = KEY_REPEAT_ENV_VAR,
                value = other,
                "invalid key repeat env var value; falling back to default"
            );
            fallback
        }
    }
}
