use clap::Parser;
use surgewatch::adapter::inbound::cli::command::{Cli, Commands, RunArgs};
use surgewatch::adapter::inbound::cli::output::{self, OutputConfig};
use surgewatch::adapter::inbound::cli::{check, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        output::warning("rustls crypto provider was already installed");
    }

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let result = match cli.command {
        Some(Commands::Check(args)) => check::execute(&args).await,
        Some(Commands::Run(args)) => run::execute(&args).await,
        None => run::execute(&RunArgs::default()).await,
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
