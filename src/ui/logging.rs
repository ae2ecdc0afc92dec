//! ui::logging
//!
//! Log subscriber setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. The filter is read from `PIPECONF_LOG` (standard
//! `EnvFilter` syntax) and otherwise follows the verbosity flags. Logs go
//! to stderr so they never mix with command output.

use tracing_subscriber::EnvFilter;

use super::output::Verbosity;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PIPECONF_LOG";

/// Default filter directive for a verbosity level.
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Debug => "pipeconf=debug",
    }
}

/// Install the global subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // Fails only when a subscriber is already set.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_enables_crate_events() {
        assert_eq!(default_directive(Verbosity::Debug), "pipeconf=debug");
        assert_eq!(default_directive(Verbosity::Normal), "warn");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(Verbosity::Quiet);
        init(Verbosity::Debug);
    }
}
