use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod resolver;
mod store;
mod utils;

use store::seqrepo::SeqRepo;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("vmc_resolver=debug,info")
    } else {
        EnvFilter::new("vmc_resolver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // One store handle for the lifetime of the process
    let config = cli.seqrepo_config();
    let store = SeqRepo::open(&config)?;

    match cli.command {
        cli::Commands::Resolve(args) => {
            cli::resolve::run(args, &store, cli.format, cli.verbose)?;
        }
        cli::Commands::Aliases(args) => {
            cli::aliases::run(args, &store, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
