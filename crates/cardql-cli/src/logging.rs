//! Tracing subscriber setup.
//!
//! Events go to stderr so command output on stdout stays machine-readable.
//! `-v` and `-vv` force `debug` and `trace`; otherwise `RUST_LOG` applies, falling back to `warn`.

use tracing_subscriber::EnvFilter;

pub fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
