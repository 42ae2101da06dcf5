//! Environment variable access.
//!
//! The loader never touches `std::env` directly. It reads through an
//! [`EnvSource`], so startup code passes the process environment and tests
//! pass a plain map.

use std::collections::{BTreeMap, HashMap};

/// Toggles the reverse proxy trust model.
pub const REVERSE_PROXY_ENABLED: &str = "REVERSE_PROXY_ENABLED";
/// Comma-separated list of trusted proxy addresses.
pub const REVERSE_PROXY_ADDRESSES: &str = "REVERSE_PROXY_ADDRESSES";
/// Overrides the client IP header (default `X-Forwarded-For`).
pub const REVERSE_PROXY_HEADER: &str = "REVERSE_PROXY_HEADER";
/// Overrides the protocol header (default `X-Forwarded-Proto`).
pub const REVERSE_PROXY_PROTO_HEADER: &str = "REVERSE_PROXY_PROTO_HEADER";
/// Overrides the host header (default `X-Forwarded-Host`).
pub const REVERSE_PROXY_HOST_HEADER: &str = "REVERSE_PROXY_HOST_HEADER";
/// Overrides the port header (default `X-Forwarded-Port`).
pub const REVERSE_PROXY_PORT_HEADER: &str = "REVERSE_PROXY_PORT_HEADER";
/// Overrides the combined `Forwarded` header.
pub const REVERSE_PROXY_FORWARDED_HEADER: &str = "REVERSE_PROXY_FORWARDED_HEADER";

/// A read-only view of environment variables.
pub trait EnvSource {
    /// Returns the raw value of `key`, or `None` if it is unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the value of `key` only if it is set and non-empty.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

/// The environment of the running process.
///
/// Values that are not valid Unicode are kept, with invalid bytes replaced
/// by U+FFFD.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
