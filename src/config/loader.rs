//! Configuration loading from the environment.

use thiserror::Error;

use crate::config::env::{
    EnvSource, ProcessEnv, REVERSE_PROXY_ADDRESSES, REVERSE_PROXY_ENABLED,
    REVERSE_PROXY_FORWARDED_HEADER, REVERSE_PROXY_HEADER, REVERSE_PROXY_HOST_HEADER,
    REVERSE_PROXY_PORT_HEADER, REVERSE_PROXY_PROTO_HEADER,
};
use crate::config::schema::ProxyTrustConfig;

/// Raw values of `REVERSE_PROXY_ENABLED` that turn proxy trust on.
///
/// Matching is exact: `"True"` and `"yes"` are false.
pub const TRUTHY_VALUES: [&str; 3] = ["TRUE", "true", "1"];

/// Characters stripped from both ends of each address entry.
const ADDRESS_TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B', '\'', '"'];

/// Error type for configuration loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable required by the current settings is unset or empty.
    #[error("{variable} is required when reverse proxy is enabled")]
    MissingRequiredConfig { variable: &'static str },
}

/// Interpret a raw `REVERSE_PROXY_ENABLED` value.
pub fn parse_enabled(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| TRUTHY_VALUES.contains(&v))
}

/// Split a comma-separated address list.
///
/// Entries are trimmed of whitespace and quotes; empty entries are dropped.
/// Order and duplicates are kept.
pub fn parse_addresses(raw: &str) -> Vec<String> {
    raw.split(',').filter_map(clean_address).collect()
}

/// Trim one address entry; `None` if nothing is left.
pub(crate) fn clean_address(entry: &str) -> Option<String> {
    let trimmed = entry.trim_matches(ADDRESS_TRIM_CHARS);
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Build the trust configuration from an environment snapshot.
pub fn load<E: EnvSource + ?Sized>(env: &E) -> Result<ProxyTrustConfig, ConfigError> {
    let enabled = parse_enabled(env.get(REVERSE_PROXY_ENABLED).as_deref());

    let trusted_addresses = if enabled {
        let raw = env
            .get_non_empty(REVERSE_PROXY_ADDRESSES)
            .ok_or(ConfigError::MissingRequiredConfig {
                variable: REVERSE_PROXY_ADDRESSES,
            })?;
        Some(parse_addresses(&raw))
    } else {
        None
    };

    Ok(ProxyTrustConfig {
        enabled,
        trusted_addresses,
        client_ip_header: env.get_non_empty(REVERSE_PROXY_HEADER),
        proto_header: env.get_non_empty(REVERSE_PROXY_PROTO_HEADER),
        host_header: env.get_non_empty(REVERSE_PROXY_HOST_HEADER),
        port_header: env.get_non_empty(REVERSE_PROXY_PORT_HEADER),
        forwarded_header: env.get_non_empty(REVERSE_PROXY_FORWARDED_HEADER),
    })
}

/// Load from the environment of the running process.
pub fn load_from_process_env() -> Result<ProxyTrustConfig, ConfigError> {
    load(&ProcessEnv)
}
