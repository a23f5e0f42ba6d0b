// Copyright (C) 2026  TextVault Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
mod commands;
mod context;
mod embedder;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use commands::*;
use std::io;
use textvault_observability::{init_tracing, LogFormat};

#[derive(Parser)]
#[command(name = "textvault")]
#[command(version, about = "Store text corpora as QR-bearing MP4 videos, query them by meaning")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (maps to a debug tracing level floor)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Colored output (always|auto|never)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a text file into a QR-bearing MP4 and index it
    Add(AddCmd),

    /// Search for chunks similar to a query
    Search(SearchCmd),

    /// Show chunk/frame/compression statistics for a document
    Stats(StatsCmd),

    /// Remove a document's entries from the index
    Delete(DeleteCmd),

    /// Remove every entry from the index
    Clear(ClearCmd),

    /// Configuration-related operations
    Config(ConfigCmd),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.quiet {
        let level = if cli.verbose { "debug" } else { "info" };
        init_tracing(LogFormat::Pretty, Some(level)).ok();
    }

    match cli.color.as_str() {
        "never" => console::set_colors_enabled(false),
        "always" => console::set_colors_enabled(true),
        "auto" => {}
        _ => {
            eprintln!("Invalid color option: {}", cli.color);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Some(Commands::Add(cmd)) => cmd.execute().await,
        Some(Commands::Search(cmd)) => cmd.execute().await,
        Some(Commands::Stats(cmd)) => cmd.execute().await,
        Some(Commands::Delete(cmd)) => cmd.execute().await,
        Some(Commands::Clear(cmd)) => cmd.execute().await,
        Some(Commands::Config(cmd)) => cmd.execute().await,
        Some(Commands::Version) => {
            print_version();
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            Ok(())
        }
        None => {
            output::header("TextVault");
            println!();
            println!("Usage: textvault [OPTIONS] <COMMAND>");
            println!();
            println!("Commands:");
            println!("  add          Encode a text file into a QR-bearing MP4 and index it");
            println!("  search       Search for chunks similar to a query");
            println!("  stats        Show chunk/frame/compression statistics for a document");
            println!("  delete       Remove a document's entries from the index");
            println!("  clear        Remove every entry from the index");
            println!("  config       Configuration-related operations");
            println!();
            println!("Run 'textvault <COMMAND> --help' for command-specific help");
            Ok(())
        }
    };

    if let Err(e) = result {
        output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn print_version() {
    println!("textvault {}", env!("CARGO_PKG_VERSION"));
    println!("rust-version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("license: {}", env!("CARGO_PKG_LICENSE"));
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "textvault", &mut io::stdout());
}
