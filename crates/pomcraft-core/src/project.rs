//! The explicit project context handed to publication logic.

use crate::component::{default_classifier, ArchiveTask, ArtifactComponent};
use crate::manifest::Manifest;
use crate::registry::Registry;
use crate::repository::ArtifactRepository;

/// Everything publication logic may read about a project.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub name: String,
    pub group: String,
    pub version: String,
    pub description: Option<String>,
    pub components: Registry<ArtifactComponent>,
    pub tasks: Registry<ArchiveTask>,
    /// In registration order.
    pub repositories: Vec<ArtifactRepository>,
}

impl ProjectContext {
    /// An empty project with no components, tasks, or repositories.
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            version: version.into(),
            description: None,
            components: Registry::new(),
            tasks: Registry::new(),
            repositories: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_component(mut self, component: ArtifactComponent) -> Self {
        self.components.register(component);
        self
    }

    pub fn with_task(mut self, task: ArchiveTask) -> Self {
        self.tasks.register(task);
        self
    }

    pub fn with_repository(mut self, repository: ArtifactRepository) -> Self {
        self.repositories.push(repository);
        self
    }

    /// Build a context from a parsed manifest.
    ///
    /// A manifest without `[components]` gets the default `java` component.
    /// `javadocJar` and `sourcesJar` declared without a classifier get
    /// `javadoc` and `sources`.
    pub fn from_manifest(manifest: &Manifest) -> miette::Result<Self> {
        let meta = &manifest.project;
        let mut ctx = Self::new(&meta.name, &meta.group, &meta.version);
        ctx.description = meta.description.clone();

        if manifest.components.is_empty() {
            ctx.components.register(ArtifactComponent::java());
        }
        for (name, decl) in &manifest.components {
            ctx.components.register(ArtifactComponent::new(name, decl.kind));
        }
        for (name, decl) in &manifest.tasks {
            let classifier = decl
                .classifier
                .clone()
                .or_else(|| default_classifier(name).map(str::to_string));
            ctx.tasks
                .register(ArchiveTask::new(name, classifier, &decl.extension));
        }
        for decl in &manifest.repositories {
            ctx.repositories.push(ArtifactRepository::from_decl(decl)?);
        }

        tracing::debug!(
            "Loaded project '{}' ({} components, {} tasks, {} repositories)",
            ctx.name,
            ctx.components.len(),
            ctx.tasks.len(),
            ctx.repositories.len()
        );
        Ok(ctx)
    }

    /// The description, or the empty string when unset.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
