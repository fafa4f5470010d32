//! Diagnostic logging setup
//!
//! Library code logs through `tracing`; the binary installs a stderr
//! subscriber here. Status lines meant for the user are not logs and do not
//! go through this.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter, e.g. `rcsetup=debug`.
pub const LOG_ENV: &str = "RCSETUP_LOG";

/// Filter used when `RCSETUP_LOG` is unset, by `-v` count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber. Later calls are no-ops.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
