//! Reverse proxy trust settings, loaded from the environment at startup.

pub mod config;
pub mod observability;
pub mod security;

pub use config::{load, load_from_process_env, ConfigError, ProxyTrustConfig};
pub use security::ForwardedHeaders;
