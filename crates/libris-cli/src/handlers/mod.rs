//! Command handlers.
//!
//! Each submodule handles one top-level command.

pub mod config;
pub mod serve;
