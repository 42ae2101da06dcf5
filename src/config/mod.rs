//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (or any EnvSource)
//!     → env.rs (variable names, EnvSource)
//!     → loader.rs (parse flag, split addresses, read header overrides)
//!     → ProxyTrustConfig (immutable)
//!     → passed explicitly to request handling
//!     → render.rs (optional settings artifact)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; no runtime reconfiguration
//! - The only fatal error is trust enabled without an address list
//! - Addresses and header names are passed through uninterpreted

pub mod env;
pub mod loader;
pub mod render;
pub mod schema;

pub use env::{EnvSource, ProcessEnv};
pub use loader::{load, load_from_process_env, ConfigError, TRUTHY_VALUES};
pub use render::{render, RenderError, SettingsFormat};
pub use schema::ProxyTrustConfig;
