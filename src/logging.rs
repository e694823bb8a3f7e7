//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PASSPICK_LOG";

/// Install the stderr subscriber.
///
/// The widget owns the screen, so in interactive mode nothing is installed
/// unless `PASSPICK_LOG` asks for it.
pub fn init(interactive: bool, quiet: bool) {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) if interactive => return,
        Err(_) => EnvFilter::new(if quiet { "error" } else { "warn" }),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
