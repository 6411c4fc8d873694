//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};

use libris_cli::{Cli, CliError, Commands, handlers, init_tracing, load_config};

#[tokio::main]
async fn main() {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        tracing::error!(error = %err, "Command failed");
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = load_config()?;

    match command {
        Commands::Serve { port } => handlers::serve::execute(config, port).await,
        Commands::Config => {
            handlers::config::execute(&config);
            Ok(())
        }
    }
}
