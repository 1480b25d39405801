use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studytrack-cli", version, about = "Studytrack CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Activity snapshot: streak, today's seconds, weekly series
    Status,
    /// Derived statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Run the foreground sampling session
    Watch(commands::watch::WatchArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status => commands::status::run(),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
