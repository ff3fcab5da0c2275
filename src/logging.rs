//! Logging setup for hosts and the replay binary

use std::env;

/// Environment variable that turns on debug logging
pub const DEBUG_ENV_VAR: &str = "SERIALVIEW_DEBUG";

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(debug: bool) -> &'static str {
    let from_env = env::var(DEBUG_ENV_VAR)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if debug || from_env {
        "debug"
    } else {
        "info"
    }
}

/// Install a compact `tracing` subscriber.
///
/// `RUST_LOG` wins over `debug`. Calling this again after a subscriber is
/// installed does nothing.
pub fn init_logging(debug: bool) {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| default_filter(debug).to_string());

    let result = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();

    if result.is_err() {
        debug!("Logging already initialised");
    }
}
