//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the libris server.
#[derive(Parser)]
#[command(name = "libris")]
#[command(about = "Book catalog API with model-generated recommendations and summaries")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["libris", "config", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Config)));
    }

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::parse_from(["libris", "serve", "--port", "9000"]);
        assert!(!cli.verbose);
        assert!(matches!(
            cli.command,
            Some(Commands::Serve { port: Some(9000) })
        ));
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::parse_from(["libris"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["libris", "serve", "--port", "http"]).is_err());
    }
}
