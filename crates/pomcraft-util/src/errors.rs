use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all pomcraft operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PomcraftError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. Pomcraft.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Pomcraft.toml for syntax errors"))]
    Manifest { message: String },

    /// A named output component or archive task is not registered on the project.
    #[error("Component not found: {name}")]
    #[diagnostic(help("Declare it under [components] or [tasks] in Pomcraft.toml"))]
    ComponentNotFound { name: String },

    /// A publication with the same name was already registered.
    #[error("Publication '{name}' is already registered")]
    DuplicatePublication { name: String },

    /// Two artifacts of one publication would share a classifier and extension.
    #[error("Artifact from task '{task}' collides with another artifact of the publication")]
    #[diagnostic(help("Give the task a distinct classifier in [tasks] in Pomcraft.toml"))]
    DuplicateArtifact { task: String },

    /// Writing or reading POM XML failed.
    #[error("XML error: {message}")]
    Xml { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PomcraftResult<T> = miette::Result<T>;
