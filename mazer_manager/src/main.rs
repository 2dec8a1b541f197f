use clap::{Parser, Subcommand};
use colored::*;
use mazer_core::logging;
use mazer_manager::commands::{self, MazeArgs};

#[derive(Parser)]
#[command(name = "mazer")]
#[command(about = "MAZER - step-by-step A* on generated mazes")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a maze and print it
    Generate {
        #[command(flatten)]
        maze: MazeArgs,
    },

    /// Pick random endpoints and run the search to the end
    Solve {
        #[command(flatten)]
        maze: MazeArgs,
    },

    /// Drive the search one key at a time (p begin, c step, m path, g new maze, q quit)
    Step {
        #[command(flatten)]
        maze: MazeArgs,
    },

    /// Print the effective configuration as TOML
    Config {
        #[command(flatten)]
        maze: MazeArgs,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    logging::init(logging::level_for_verbosity(cli.verbose));

    if let Err(e) = run_command(cli.command) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_command(command: Commands) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    match command {
        Commands::Generate { maze } => commands::generate::generate_maze(&maze, &mut stdout),
        Commands::Solve { maze } => {
            commands::solve::solve_maze(&maze, &mut stdout)?;
            Ok(())
        }
        Commands::Step { maze } => commands::step::step_maze(&maze),
        Commands::Config { maze } => commands::config::show_config(&maze, &mut stdout),
        Commands::Version => {
            println!("{} {}", "mazer".green().bold(), mazer_manager::VERSION);
            Ok(())
        }
    }
}
