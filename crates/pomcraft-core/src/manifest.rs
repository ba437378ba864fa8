use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::component::ComponentKind;

/// The parsed representation of a `Pomcraft.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub project: ProjectMetadata,

    #[serde(default)]
    pub components: BTreeMap<String, ComponentDecl>,

    #[serde(default)]
    pub tasks: BTreeMap<String, TaskDecl>,

    /// Kept as an array so registration order survives parsing.
    #[serde(default)]
    pub repositories: Vec<RepositoryDecl>,

    #[serde(default)]
    pub publishing: Option<PublishingConfig>,
}

/// Project identity and metadata from the `[project]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub group: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An output component from `[components.<name>]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDecl {
    pub kind: ComponentKind,
}

/// An archive-producing task from `[tasks.<name>]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDecl {
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    "jar".to_string()
}

/// A repository, either a well-known shorthand (`"mavenCentral"`,
/// `"mavenLocal"`) or an explicit name and URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryDecl {
    Shorthand(String),
    Detailed { name: String, url: String },
}

/// Publication settings from `[publishing]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishingConfig {
    #[serde(default = "default_component")]
    pub component: String,
    #[serde(default, rename = "with-javadoc-and-sources")]
    pub with_javadoc_and_sources: Option<bool>,
}

fn default_component() -> String {
    "java".to_string()
}

impl Manifest {
    /// Load and parse a `Pomcraft.toml` file from the given path.
    ///
    /// Before parsing, `${env:VAR}` references in the manifest content are
    /// resolved using `.pomcraft.env` (if present alongside `Pomcraft.toml`)
    /// and process environment variables.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            pomcraft_util::errors::PomcraftError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;

        let dir = path.parent().unwrap_or(Path::new("."));
        let env_vars =
            crate::properties::load_env_file(&dir.join(crate::ENV_FILE)).unwrap_or_default();
        let resolved = crate::properties::interpolate(&content, &env_vars);

        Self::parse_toml(&resolved)
    }

    /// Parse a `Pomcraft.toml` from a string (no interpolation).
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            pomcraft_util::errors::PomcraftError::Manifest {
                message: format!("Failed to parse Pomcraft.toml: {e}"),
            }
            .into()
        })
    }

    /// The component named in `[publishing]`, defaulting to `java`.
    pub fn published_component(&self) -> &str {
        self.publishing
            .as_ref()
            .map(|p| p.component.as_str())
            .unwrap_or("java")
    }
}
