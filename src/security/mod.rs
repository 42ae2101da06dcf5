//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! ProxyTrustConfig
//!     → headers.rs (effective X-Forwarded-* names)
//!     → request handling decides which headers to believe
//! ```
//!
//! # Design Decisions
//! - No trust in forwarded headers unless the peer is a listed proxy
//! - Fail closed: trust disabled means every peer is untrusted

pub mod headers;

pub use headers::ForwardedHeaders;
