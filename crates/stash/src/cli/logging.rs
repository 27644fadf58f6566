//! Logging goes to stderr through `tracing-subscriber`.
//!
//! The default filter is `warn` (`debug` with `--verbose`). `RUST_LOG` takes
//! precedence when set.

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "stash=debug,stashapp=debug"
    } else {
        "warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_logging(verbose: bool) {
    let layer = fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(verbose))
        .with(layer)
        .try_init();
}
