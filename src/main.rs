use clap::Parser;
use matchday_banner::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Resolve(args) => cli::resolve::run(args).await,
    }
}
