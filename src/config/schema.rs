//! Configuration schema definitions.
//!
//! `ProxyTrustConfig` is built once at startup and shared read-only with
//! whatever needs to decide whether forwarded headers can be believed.
//! Serde keys match the generated settings file.

use serde::{Deserialize, Serialize};

/// Reverse proxy trust settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProxyTrustConfig {
    /// Whether forwarded headers from trusted proxies are honored.
    #[serde(rename = "reverse_proxy", default)]
    pub enabled: bool,

    /// Trusted proxy addresses, in input order. `None` when trust is disabled.
    #[serde(
        rename = "reverse_proxy_addresses",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trusted_addresses: Option<Vec<String>>,

    /// Header carrying the client IP, if not `X-Forwarded-For`.
    #[serde(
        rename = "reverse_proxy_header",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_ip_header: Option<String>,

    /// Header carrying the client protocol, if not `X-Forwarded-Proto`.
    #[serde(
        rename = "reverse_proxy_proto_header",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub proto_header: Option<String>,

    /// Header carrying the client host, if not `X-Forwarded-Host`.
    #[serde(
        rename = "reverse_proxy_host_header",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub host_header: Option<String>,

    /// Header carrying the client port, if not `X-Forwarded-Port`.
    #[serde(
        rename = "reverse_proxy_port_header",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub port_header: Option<String>,

    /// Combined forwarding header, if not `Forwarded`.
    #[serde(
        rename = "reverse_proxy_forwarded_header",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub forwarded_header: Option<String>,
}

impl ProxyTrustConfig {
    /// Trusted addresses as a slice; empty when trust is disabled.
    pub fn addresses(&self) -> &[String] {
        self.trusted_addresses.as_deref().unwrap_or(&[])
    }

    /// Exact string match against the trusted list.
    ///
    /// No IP parsing or CIDR matching is done here.
    pub fn is_trusted_proxy(&self, addr: &str) -> bool {
        self.enabled && self.addresses().iter().any(|a| a == addr)
    }

    /// True when trust is enabled but every configured address trimmed away.
    pub fn trusts_nobody(&self) -> bool {
        self.enabled && self.addresses().is_empty()
    }

    /// Number of header overrides present.
    pub fn override_count(&self) -> usize {
        [
            &self.client_ip_header,
            &self.proto_header,
            &self.host_header,
            &self.port_header,
            &self.forwarded_header,
        ]
        .iter()
        .filter(|h| h.is_some())
        .count()
    }
}
