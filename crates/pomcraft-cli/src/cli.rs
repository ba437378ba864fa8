//! CLI argument definitions for pomcraft.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pomcraft",
    version,
    about = "Apply the standard Maven publication convention to a project",
    long_about = "pomcraft reads Pomcraft.toml, registers the project's `maven` publication \
                  with fixed POM metadata, and lists every https repository in the generated POM."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the POM for the `maven` publication
    Pom {
        /// Attach the javadoc and sources archives
        #[arg(long)]
        with_javadoc_and_sources: bool,
        /// Output directory, relative to the project root
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Print the POM instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Show what the `maven` publication would upload and where
    Publications {
        /// Attach the javadoc and sources archives
        #[arg(long)]
        with_javadoc_and_sources: bool,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
