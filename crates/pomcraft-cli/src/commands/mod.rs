//! Command dispatch and handler modules.

mod pom;
mod publications;

use std::path::PathBuf;

use miette::Result;

use pomcraft_util::errors::PomcraftError;
use pomcraft_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Pom {
            with_javadoc_and_sources,
            output_dir,
            stdout,
        } => pom::exec(with_javadoc_and_sources, output_dir, stdout),
        Command::Publications {
            with_javadoc_and_sources,
            json,
        } => publications::exec(with_javadoc_and_sources, json),
    }
}

/// Locate the project root from the current directory upwards.
fn project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(PomcraftError::Io)?;
    find_ancestor_with(&cwd, pomcraft_core::MANIFEST_FILE).ok_or_else(|| {
        PomcraftError::Manifest {
            message: "Could not find Pomcraft.toml in this directory or any parent".to_string(),
        }
        .into()
    })
}

/// A bare flag can only force auxiliary archives on; absence defers to config.
fn flag_override(flag: bool) -> Option<bool> {
    flag.then_some(true)
}
