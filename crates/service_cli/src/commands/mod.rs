//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands load the
//! school bundle, act on it, print a plain-text report and, for edits,
//! write the bundle back.

pub mod assign;
pub mod calendar;
pub mod check;
pub mod schedule;
pub mod status;
