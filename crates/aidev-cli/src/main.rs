use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;
mod pipeline;

fn main() {
    if let Err(error) = run() {
        eprintln!("aidev error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = bootstrap::load_config()?;

    match &cli.command {
        cli::Commands::Run(args) => commands::run::handle(args, config, &flags),
        cli::Commands::Classify(args) => commands::classify::handle(args, &config, &flags),
        cli::Commands::Keywords(args) => commands::keywords::handle(args, &config, &flags),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AIDEV_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
