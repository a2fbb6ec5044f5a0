//! Betza CLI - compile, inspect, and interactively explore piece movement.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Betza - a fairy-chess movement notation compiler
#[derive(Parser, Debug)]
#[command(name = "betza")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a notation string and print its move records
    Compile {
        /// Movement notation (e.g. "mRcN", "fmWfceF")
        notation: String,

        /// Board size bounding rider travel (default: unbounded cap)
        #[arg(short, long)]
        board: Option<u16>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Render a notation's reachable moves on an ASCII board
    Show {
        /// Movement notation
        notation: String,

        /// Board size (default: 15)
        #[arg(short, long, default_value = "15")]
        board: u16,

        /// Blocker square as X,Y relative to the piece (repeatable)
        #[arg(long = "blocker", value_name = "X,Y")]
        blockers: Vec<String>,
    },

    /// List catalog pieces and their notation
    Pieces {
        /// variants.ini file (default: the built-in pieces)
        #[arg(short, long)]
        file: Option<std::path::PathBuf>,

        /// Only show pieces of this variant
        #[arg(long)]
        variant: Option<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Interactive TUI: type notation, place blockers, watch the board
    Watch {
        /// Starting notation
        #[arg(default_value = "")]
        notation: String,

        /// Board size (default: 15)
        #[arg(short, long, default_value = "15")]
        board: u16,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Compile {
            notation,
            board,
            format,
        } => cli::compile::execute(&notation, board, format),

        Commands::Show {
            notation,
            board,
            blockers,
        } => cli::show::execute(&notation, board, &blockers),

        Commands::Pieces {
            file,
            variant,
            format,
        } => cli::pieces::execute(file.as_deref(), variant.as_deref(), format),

        Commands::Watch { notation, board } => cli::watch::execute(notation, board),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
