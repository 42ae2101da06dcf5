//! Rendering the generated settings artifact.
//!
//! Deployment tooling writes the loaded configuration next to the
//! application so the request pipeline can pick it up without re-reading
//! the environment. Reading it back applies the same rules as loading from
//! the environment.

use thiserror::Error;

use crate::config::env::REVERSE_PROXY_ADDRESSES;
use crate::config::loader::{clean_address, ConfigError};
use crate::config::schema::ProxyTrustConfig;

/// Output format for the settings artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SettingsFormat {
    #[default]
    Toml,
    Json,
}

/// Errors produced while rendering or parsing a settings artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("TOML serialization failed: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML parse failed: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(#[from] ConfigError),

    #[error("reverse_proxy_addresses present while reverse proxy is disabled")]
    AddressesWithoutTrust,
}

/// Serialize `config` into the given format. Unset fields are omitted.
pub fn render(config: &ProxyTrustConfig, format: SettingsFormat) -> Result<String, RenderError> {
    let out = match format {
        SettingsFormat::Toml => toml::to_string(config)?,
        SettingsFormat::Json => serde_json::to_string_pretty(config)?,
    };
    Ok(out)
}

/// Parse a previously rendered artifact.
///
/// Enabled without an address list and addresses while disabled are
/// rejected. Address entries are trimmed like environment input, and empty
/// header overrides count as unset.
pub fn parse(content: &str, format: SettingsFormat) -> Result<ProxyTrustConfig, RenderError> {
    let config: ProxyTrustConfig = match format {
        SettingsFormat::Toml => toml::from_str(content)?,
        SettingsFormat::Json => serde_json::from_str(content)?,
    };
    normalize(config)
}

fn normalize(config: ProxyTrustConfig) -> Result<ProxyTrustConfig, RenderError> {
    let trusted_addresses = match (config.enabled, config.trusted_addresses) {
        (true, None) => {
            return Err(ConfigError::MissingRequiredConfig {
                variable: REVERSE_PROXY_ADDRESSES,
            }
            .into())
        }
        (false, Some(_)) => return Err(RenderError::AddressesWithoutTrust),
        (true, Some(addrs)) => Some(addrs.iter().filter_map(|a| clean_address(a)).collect()),
        (false, None) => None,
    };

    let non_empty = |h: Option<String>| h.filter(|v| !v.is_empty());

    Ok(ProxyTrustConfig {
        enabled: config.enabled,
        trusted_addresses,
        client_ip_header: non_empty(config.client_ip_header),
        proto_header: non_empty(config.proto_header),
        host_header: non_empty(config.host_header),
        port_header: non_empty(config.port_header),
        forwarded_header: non_empty(config.forwarded_header),
    })
}
