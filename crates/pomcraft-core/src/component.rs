//! Output components and archive-producing tasks of a project.

use serde::{Deserialize, Serialize};

use crate::registry::Named;

/// Name of the task that bundles API documentation.
pub const JAVADOC_JAR_TASK: &str = "javadocJar";

/// Name of the task that bundles sources.
pub const SOURCES_JAR_TASK: &str = "sourcesJar";

/// Classifier used for a well-known archive task when the manifest omits one.
pub fn default_classifier(task_name: &str) -> Option<&'static str> {
    match task_name {
        JAVADOC_JAR_TASK => Some("javadoc"),
        SOURCES_JAR_TASK => Some("sources"),
        _ => None,
    }
}

/// What a component produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// The plain compiled library.
    Java,
    /// A bundle with dependencies relocated into the main jar.
    Shadow,
}

/// Handle to something the project produces. Publication logic reads it but
/// never constructs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactComponent {
    name: String,
    kind: ComponentKind,
}

impl ArtifactComponent {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The default component registered by a plain library project.
    pub fn java() -> Self {
        Self::new("java", ComponentKind::Java)
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Packaging written to the POM for this component.
    pub fn packaging(&self) -> &'static str {
        "jar"
    }
}

impl Named for ArtifactComponent {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A registered task that produces an archive file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveTask {
    name: String,
    classifier: Option<String>,
    extension: String,
}

impl ArchiveTask {
    pub fn new(
        name: impl Into<String>,
        classifier: Option<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            classifier,
            extension: extension.into(),
        }
    }

    /// The standard `javadocJar` task (classifier `javadoc`).
    pub fn javadoc_jar() -> Self {
        Self::new(JAVADOC_JAR_TASK, Some("javadoc".to_string()), "jar")
    }

    /// The standard `sourcesJar` task (classifier `sources`).
    pub fn sources_jar() -> Self {
        Self::new(SOURCES_JAR_TASK, Some("sources".to_string()), "jar")
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Named for ArchiveTask {
    fn name(&self) -> &str {
        &self.name
    }
}
