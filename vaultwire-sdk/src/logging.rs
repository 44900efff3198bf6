//! Optional log output for applications embedding the client.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable holding the log filter, e.g. `vaultwire_sdk=debug`.
pub const LOG_ENV_VAR: &str = "VAULTWIRE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs a compact fmt subscriber filtered by [`LOG_ENV_VAR`].
///
/// Returns `false` when a global subscriber is already installed, which is
/// not an error. Safe to call more than once.
pub fn try_init() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
