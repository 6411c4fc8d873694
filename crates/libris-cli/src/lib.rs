//! Command-line entry for the libris book catalog server.
//!
//! `main` is the composition root: it loads `.env`, installs logging,
//! parses arguments, resolves [`libris_core::AppConfig`] and dispatches to
//! a handler in [`handlers`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{init_tracing, load_config};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
