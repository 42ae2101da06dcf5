//! Shared utilities for integration testing.

use std::collections::HashMap;

/// Build an in-memory environment from key/value pairs.
#[allow(dead_code)]
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Environment with trust enabled and the given raw address list.
#[allow(dead_code)]
pub fn enabled_env(addresses: &str) -> HashMap<String, String> {
    env(&[
        ("REVERSE_PROXY_ENABLED", "TRUE"),
        ("REVERSE_PROXY_ADDRESSES", addresses),
    ])
}

/// The `proxy-trust` binary with an empty environment.
#[allow(dead_code)]
pub fn proxy_trust_cmd() -> std::process::Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_proxy-trust"));
    cmd.env_clear();
    cmd
}
