//! cardprep Core — shared types, configuration, errors, and path scoping.
//!
//! This crate provides the foundational types used across all cardprep
//! crates. It has no internal cardprep dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: The per-run [`Configuration`] snapshot and its defaults
//! - [`scope`]: Glob-style path matching and the [`ScopeGate`]

pub mod config;
pub mod error;
pub mod scope;

// Re-export key types at crate root for convenience
pub use config::{Configuration, ScopeConfig, ScopeMode};
pub use error::{Error, Result};
pub use scope::{PathMatcher, ScopeGate};
