mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use ltrfl_core::GenerationInput;
use ltrfl_storage::Paths;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let paths = match cli.data_dir {
        Some(dir) => Paths::with_root(dir),
        None => Paths::new()?,
    };

    match cli.command {
        Commands::Init => commands::init::run(&paths),
        Commands::Record {
            pipeline,
            name,
            cost,
            latency,
            content_type,
            city,
        } => {
            let mut input = GenerationInput::new(pipeline, name, cost, latency);
            input.content_type = content_type;
            input.city_id = city;
            commands::record::run(&paths, input)
        }
        Commands::Winner { id } => commands::winner::run(&paths, &id),
        Commands::Budget => commands::budget::run(&paths),
        Commands::Leaderboard { json } => commands::leaderboard::run(&paths, json),
        Commands::ResetMonth => commands::reset::run(&paths),
        Commands::History {
            pipeline,
            limit,
            stats,
            file,
        } => commands::history::run(
            &paths,
            &commands::history::HistoryOptions {
                pipeline,
                limit,
                stats,
                file,
            },
        ),
        Commands::Export { out } => commands::export::run(&paths, out.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
