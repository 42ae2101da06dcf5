//! Forwarded header names.
//!
//! # Responsibilities
//! - Resolve which header carries client IP, proto, host and port
//! - Fall back to the conventional X-Forwarded-* names when no override is set
//!
//! # Design Decisions
//! - Header names are not validated; whatever the operator set is used
//! - Resolution is done once from the immutable config, not per request

use serde::Serialize;

use crate::config::ProxyTrustConfig;

pub const DEFAULT_CLIENT_IP_HEADER: &str = "X-Forwarded-For";
pub const DEFAULT_PROTO_HEADER: &str = "X-Forwarded-Proto";
pub const DEFAULT_HOST_HEADER: &str = "X-Forwarded-Host";
pub const DEFAULT_PORT_HEADER: &str = "X-Forwarded-Port";
pub const DEFAULT_FORWARDED_HEADER: &str = "Forwarded";

/// Effective header names for each forwarded attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForwardedHeaders {
    pub client_ip: String,
    pub proto: String,
    pub host: String,
    pub port: String,
    pub forwarded: String,
}

impl Default for ForwardedHeaders {
    fn default() -> Self {
        Self {
            client_ip: DEFAULT_CLIENT_IP_HEADER.to_string(),
            proto: DEFAULT_PROTO_HEADER.to_string(),
            host: DEFAULT_HOST_HEADER.to_string(),
            port: DEFAULT_PORT_HEADER.to_string(),
            forwarded: DEFAULT_FORWARDED_HEADER.to_string(),
        }
    }
}

impl ForwardedHeaders {
    /// Apply the overrides present in `config` on top of the defaults.
    pub fn from_config(config: &ProxyTrustConfig) -> Self {
        fn pick(over: &Option<String>, default: &str) -> String {
            over.clone().unwrap_or_else(|| default.to_string())
        }

        Self {
            client_ip: pick(&config.client_ip_header, DEFAULT_CLIENT_IP_HEADER),
            proto: pick(&config.proto_header, DEFAULT_PROTO_HEADER),
            host: pick(&config.host_header, DEFAULT_HOST_HEADER),
            port: pick(&config.port_header, DEFAULT_PORT_HEADER),
            forwarded: pick(&config.forwarded_header, DEFAULT_FORWARDED_HEADER),
        }
    }
}
