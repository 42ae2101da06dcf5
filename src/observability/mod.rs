//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Startup binary produces:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → Container log collection (stdout/stderr)
//! ```
//!
//! # Design Decisions
//! - The loader itself never logs; the binary reports what was loaded
//! - Log level configurable via CLI flag and RUST_LOG

pub mod logging;
