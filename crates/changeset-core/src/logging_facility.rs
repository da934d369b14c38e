//! Structured logging facility for Changeset
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The diff and translation functions are pure and only emit
//! `tracing::debug!` / `tracing::warn!` details. Lifecycle events
//! (start/end/end_error) belong to the layers that drive them: the replay
//! queue and the CLI.
//!
//! # Usage
//!
//! ```rust
//! use changeset_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
