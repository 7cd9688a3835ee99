mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; the default stays at WARN so log lines do not
    // scribble over the dashboard's alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard { seed } => commands::dashboard::run(seed),
        Commands::Estimate {
            activity,
            duration,
            weight,
            seed,
            model,
        } => commands::estimate::run(activity, duration, weight, seed, model.as_deref()),
        Commands::Train { out, seed } => commands::train::run(&out, seed),
        Commands::Version => commands::version::run(),
    }
}
