//! Path scoping.
//!
//! - [`pattern`]: restricted glob syntax compiled to anchored matchers
//! - [`gate`]: per-document in-scope decision driven by [`ScopeConfig`](crate::ScopeConfig)

pub mod gate;
pub mod pattern;

pub use gate::ScopeGate;
pub use pattern::{PathMatcher, glob_to_regex};
