//! Tracing subscriber setup for binaries embedding the resolver

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber that writes compact logs to stderr.
///
/// The `RUST_LOG` environment variable selects the filter; `default_level`
/// applies when it is unset or invalid. Fails if a global subscriber is
/// already installed.
pub fn init(default_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{info, warn};

    #[test]
    fn test_logging_init() {
        // Only the first init in a process can succeed
        let _ = init("info");

        info!("This is an info message");
        warn!("This is a warning message");

        assert!(init("debug").is_err());
    }
}
