//! ClassClock CLI library
//!
//! Configuration, persistence and command implementations behind the
//! `classclock` binary.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate
//! wires the JSON:API adapter to the bell schedule core and renders the
//! results for a terminal.

pub mod commands;
pub mod config;
pub mod error;
pub mod store;

pub use error::{CliError, Result};
