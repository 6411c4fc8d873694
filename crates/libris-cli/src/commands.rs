//! Main commands enum.

use clap::Subcommand;

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on (overrides LIBRIS_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the resolved configuration with secrets masked
    Config,
}
