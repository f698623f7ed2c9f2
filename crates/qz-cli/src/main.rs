//! CLI frontend for the Quizbox quiz engine.

mod commands;
mod console;
mod logging;
mod menu;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "qz",
    about = "Quizbox: create a quiz and take it in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive create/take menu
    Play {
        /// Ignore letter case and surrounding spaces when scoring answers
        #[arg(long)]
        ignore_case: bool,

        /// Also print each attempt as a JSON line
        #[arg(long)]
        json: bool,
    },

    /// List the question kinds the factory accepts
    Kinds,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Play { ignore_case, json } => commands::play::run(ignore_case, json),
        Commands::Kinds => commands::kinds::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
