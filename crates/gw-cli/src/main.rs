//! CLI frontend for the Grueworks text adventure engine.

mod commands;
mod store;
mod style;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gw",
    about = "Grueworks - play and inspect text adventure worlds",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world on stdin/stdout
    Play {
        /// World file (default: the bundled starter world)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Player name
        #[arg(short, long)]
        name: Option<String>,

        /// RNG seed for reproducible combat
        #[arg(long)]
        seed: Option<u64>,

        /// Directory for save files (enables save/load)
        #[arg(long)]
        save_dir: Option<PathBuf>,

        /// Inventory slots
        #[arg(long)]
        max_items: Option<usize>,

        /// Carry weight limit in pounds
        #[arg(long)]
        max_weight: Option<u32>,
    },

    /// Validate a world file
    Check {
        /// World file to validate
        #[arg(short, long)]
        world: PathBuf,
    },

    /// List the rooms of a world
    Rooms {
        /// World file (default: the bundled starter world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Write a world as JSON
    Export {
        /// World file to normalize (default: the bundled starter world)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            world,
            name,
            seed,
            save_dir,
            max_items,
            max_weight,
        } => commands::play::run(commands::play::PlayOptions {
            world,
            name,
            seed,
            save_dir,
            max_items,
            max_weight,
        }),
        Commands::Check { world } => commands::check::run(&world),
        Commands::Rooms { world } => commands::rooms::run(world.as_deref()),
        Commands::Export { world, output } => {
            commands::export::run(world.as_deref(), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Route `log` records to stderr. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.target(env_logger::Target::Stderr);
    builder.init();
}
