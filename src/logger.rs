//! Tracing setup.
//!
//! Logs go to stderr and are off unless `FLAPPY_LOG` is set, because the game
//! owns the terminal while it runs. Redirect stderr to keep them:
//! `FLAPPY_LOG=debug flappy 2>flappy.log`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt::time, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV_VAR: &str = "FLAPPY_LOG";

/// Install the global subscriber. Call once, early in `main`.
/// Returns false when another subscriber was already installed.
pub fn init() -> bool {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    // A subscriber may already be set (tests, embedding); keep that one.
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_timer(time::uptime()),
        )
        .with(filter)
        .try_init()
        .is_ok();
    if !installed {
        tracing::debug!("tracing subscriber already installed");
    }
    installed
}
