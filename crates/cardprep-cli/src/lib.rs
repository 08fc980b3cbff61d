//! # cardprep-cli
//!
//! Command-line front end for cardprep:
//! - `run`: normalize notes in place (or preview/check without writing)
//! - `scope`: show which notes the configured scope admits
//! - `config`: inspect and edit the TOML configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;

pub use config::ConfigStore;
