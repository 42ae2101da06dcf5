//! End-to-end runs of the `proxy-trust` binary.

use proxy_trust::config::render::{parse, SettingsFormat};
use proxy_trust::ProxyTrustConfig;

mod common;

#[test]
fn test_missing_addresses_exits_non_zero() {
    let out = common::proxy_trust_cmd()
        .env("REVERSE_PROXY_ENABLED", "TRUE")
        .arg("check")
        .output()
        .unwrap();

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("REVERSE_PROXY_ADDRESSES is required when reverse proxy is enabled"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_check_warns_when_every_address_is_empty() {
    let out = common::proxy_trust_cmd()
        .env("REVERSE_PROXY_ENABLED", "1")
        .env("REVERSE_PROXY_ADDRESSES", ",,")
        .arg("check")
        .output()
        .unwrap();

    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("every address entry was empty"), "stderr: {stderr}");
    assert!(stderr.contains("Reverse proxy trust enabled"), "stderr: {stderr}");
}

#[test]
fn test_check_reports_disabled_trust() {
    let out = common::proxy_trust_cmd().arg("check").output().unwrap();

    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Reverse proxy trust disabled"), "stderr: {stderr}");
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let out = common::proxy_trust_cmd()
        .env("REVERSE_PROXY_ENABLED", "1")
        .env("REVERSE_PROXY_ADDRESSES", ",,")
        .args(["--log-level", "verbose", "check"])
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("verbose"), "stderr: {stderr}");
}

#[test]
fn test_render_writes_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reverse-proxy.toml");

    let out = common::proxy_trust_cmd()
        .env("REVERSE_PROXY_ENABLED", "true")
        .env("REVERSE_PROXY_ADDRESSES", "'192.168.1.1', '10.0.0.1'")
        .env("REVERSE_PROXY_PROTO_HEADER", "X-Scheme")
        .arg("render")
        .arg("--output")
        .arg(&path)
        .output()
        .unwrap();

    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    let content = std::fs::read_to_string(&path).unwrap();
    let expected = ProxyTrustConfig {
        enabled: true,
        trusted_addresses: Some(vec!["192.168.1.1".into(), "10.0.0.1".into()]),
        proto_header: Some("X-Scheme".into()),
        ..Default::default()
    };
    assert_eq!(parse(&content, SettingsFormat::Toml).unwrap(), expected);
}

#[test]
fn test_render_json_to_stdout() {
    let out = common::proxy_trust_cmd()
        .args(["render", "--format", "json"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "reverse_proxy": false }));
}

#[test]
fn test_headers_prints_effective_names() {
    let out = common::proxy_trust_cmd()
        .env("REVERSE_PROXY_HEADER", "X-Real-IP")
        .env("REVERSE_PROXY_PORT_HEADER", "")
        .arg("headers")
        .output()
        .unwrap();

    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "client_ip": "X-Real-IP",
            "proto": "X-Forwarded-Proto",
            "host": "X-Forwarded-Host",
            "port": "X-Forwarded-Port",
            "forwarded": "Forwarded",
        })
    );
}

#[cfg(unix)]
#[test]
fn test_non_unicode_addresses_are_kept_lossy() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let out = common::proxy_trust_cmd()
        .env("REVERSE_PROXY_ENABLED", "1")
        .env("REVERSE_PROXY_ADDRESSES", OsStr::from_bytes(b"10.0.0.1, 10.0.0.\xff"))
        .args(["render", "--format", "json"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        value["reverse_proxy_addresses"],
        serde_json::json!(["10.0.0.1", "10.0.0.\u{FFFD}"])
    );
}
