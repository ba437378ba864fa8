//! Core data types for pomcraft.
//!
//! This crate defines the explicit project model that publication logic
//! consumes: manifest parsing, the project context, typed registries for
//! output components and archive tasks, artifact repositories, global
//! configuration, and `.pomcraft.env` interpolation.
//!
//! This crate is intentionally free of XML and network I/O.

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "Pomcraft.toml";

/// File name of the per-project secrets file used for `${env:VAR}` interpolation.
pub const ENV_FILE: &str = ".pomcraft.env";

pub mod component;
pub mod config;
pub mod manifest;
pub mod project;
pub mod properties;
pub mod registry;
pub mod repository;
