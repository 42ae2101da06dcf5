//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level at startup
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - RUST_LOG wins over the default directive

use std::io::IsTerminal;

use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Install the global subscriber. `default_level` applies when `RUST_LOG` is unset.
pub fn init_logging(default_level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(default_level).into());

    // A subscriber may already be installed (tests, embedding hosts).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init();
}

fn default_directive(level: LevelFilter) -> String {
    format!("proxy_trust={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(LevelFilter::DEBUG), "proxy_trust=debug");
        assert_eq!(default_directive(LevelFilter::OFF), "proxy_trust=off");
    }

    #[test]
    fn test_init_installs_global_subscriber() {
        init_logging(LevelFilter::INFO);
        assert!(tracing::dispatcher::has_been_set());

        // Second call keeps the first subscriber instead of panicking.
        init_logging(LevelFilter::DEBUG);
        assert!(tracing::dispatcher::has_been_set());
    }
}
