//! The `maven` publication: what gets published and with which POM.

use serde::Serialize;

use pomcraft_core::component::{
    ArchiveTask, ArtifactComponent, JAVADOC_JAR_TASK, SOURCES_JAR_TASK,
};
use pomcraft_core::project::ProjectContext;
use pomcraft_core::registry::Named;
use pomcraft_util::errors::PomcraftError;

use crate::conventions::PUBLICATION_NAME;
use crate::pom::PomMetadata;
use crate::repository::MavenRepository;

/// A supplementary archive published next to the primary artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuxiliaryArtifact {
    pub task: String,
    pub classifier: Option<String>,
    pub extension: String,
}

impl From<&ArchiveTask> for AuxiliaryArtifact {
    fn from(task: &ArchiveTask) -> Self {
        Self {
            task: task.name().to_string(),
            classifier: task.classifier().map(str::to_string),
            extension: task.extension().to_string(),
        }
    }
}

/// One file a publication would upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedFile {
    pub file_name: String,
    pub classifier: Option<String>,
    pub extension: String,
}

/// A named bundle of artifacts plus POM metadata. Immutable once built.
#[derive(Debug, Clone)]
pub struct Publication {
    name: String,
    component: ArtifactComponent,
    auxiliary_artifacts: Vec<AuxiliaryArtifact>,
    pom: PomMetadata,
}

impl Publication {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component(&self) -> &ArtifactComponent {
        &self.component
    }

    /// Documentation bundle then source bundle, or nothing.
    pub fn auxiliary_artifacts(&self) -> &[AuxiliaryArtifact] {
        &self.auxiliary_artifacts
    }

    pub fn pom(&self) -> &PomMetadata {
        &self.pom
    }

    /// Every file this publication uploads: the primary artifact, the
    /// auxiliary archives in order, then the POM.
    pub fn files(&self) -> Vec<PublishedFile> {
        let artifact = self.pom.artifact_id();
        let version = self.pom.version();

        let mut files = vec![PublishedFile {
            file_name: MavenRepository::file_name(artifact, version, None, self.pom.packaging()),
            classifier: None,
            extension: self.pom.packaging().to_string(),
        }];
        files.extend(self.auxiliary_artifacts.iter().map(|aux| PublishedFile {
            file_name: MavenRepository::file_name(
                artifact,
                version,
                aux.classifier.as_deref(),
                &aux.extension,
            ),
            classifier: aux.classifier.clone(),
            extension: aux.extension.clone(),
        }));
        files.push(PublishedFile {
            file_name: MavenRepository::file_name(artifact, version, None, "pom"),
            classifier: None,
            extension: "pom".to_string(),
        });
        files
    }
}

/// Every artifact must be addressable by its (classifier, extension) pair,
/// the primary artifact having no classifier.
fn check_distinct(packaging: &str, auxiliary: &[AuxiliaryArtifact]) -> miette::Result<()> {
    let mut seen = vec![(None, packaging)];
    for aux in auxiliary {
        let key = (aux.classifier.as_deref(), aux.extension.as_str());
        if seen.contains(&key) {
            return Err(PomcraftError::DuplicateArtifact {
                task: aux.task.clone(),
            }
            .into());
        }
        seen.push(key);
    }
    Ok(())
}

/// The publications registered on a project, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Publications {
    entries: Vec<Publication>,
}

impl Publications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a publication. Names are unique.
    pub fn register(&mut self, publication: Publication) -> miette::Result<&Publication> {
        if self.get(&publication.name).is_some() {
            return Err(PomcraftError::DuplicatePublication {
                name: publication.name,
            }
            .into());
        }
        self.entries.push(publication);
        let idx = self.entries.len() - 1;
        Ok(&self.entries[idx])
    }

    pub fn get(&self, name: &str) -> Option<&Publication> {
        self.entries.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Apply the standard publication convention to `project`.
///
/// Looks up `component_name` and, when `include_auxiliary_artifacts` is set,
/// the `javadocJar` and `sourcesJar` tasks. Any missing lookup fails with
/// [`PomcraftError::ComponentNotFound`] before anything is registered, and
/// archives that would overwrite each other fail with
/// [`PomcraftError::DuplicateArtifact`]. On success a single publication
/// named `maven` is added to `publications`.
pub fn configure_publishing<'a>(
    project: &ProjectContext,
    publications: &'a mut Publications,
    component_name: &str,
    include_auxiliary_artifacts: bool,
) -> miette::Result<&'a Publication> {
    let component = project.components.get(component_name)?;

    let auxiliary_artifacts = if include_auxiliary_artifacts {
        let javadoc = project.tasks.get(JAVADOC_JAR_TASK)?;
        let sources = project.tasks.get(SOURCES_JAR_TASK)?;
        vec![AuxiliaryArtifact::from(javadoc), AuxiliaryArtifact::from(sources)]
    } else {
        Vec::new()
    };

    let pom = PomMetadata::build(project, component);
    check_distinct(pom.packaging(), &auxiliary_artifacts)?;

    tracing::info!(
        "Registering publication '{}' for {}:{}:{} ({} auxiliary artifacts, {} repositories in POM)",
        PUBLICATION_NAME,
        pom.group_id(),
        pom.artifact_id(),
        pom.version(),
        auxiliary_artifacts.len(),
        pom.repositories().len()
    );

    publications.register(Publication {
        name: PUBLICATION_NAME.to_string(),
        component: component.clone(),
        auxiliary_artifacts,
        pom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomcraft_core::component::ComponentKind;
    use pomcraft_core::repository::ArtifactRepository;

    fn library() -> ProjectContext {
        ProjectContext::new("common", "de.natrox", "1.0.0")
            .with_component(ArtifactComponent::java())
            .with_task(ArchiveTask::javadoc_jar())
            .with_task(ArchiveTask::sources_jar())
    }

    #[test]
    fn registers_under_maven() {
        let mut pubs = Publications::new();
        let publication = configure_publishing(&library(), &mut pubs, "java", false).unwrap();
        assert_eq!(publication.name(), "maven");
        assert_eq!(publication.component().name(), "java");
        assert_eq!(pubs.len(), 1);
        assert!(pubs.get("maven").is_some());
    }

    #[test]
    fn without_flag_no_auxiliary_artifacts() {
        let mut pubs = Publications::new();
        let publication = configure_publishing(&library(), &mut pubs, "java", false).unwrap();
        assert!(publication.auxiliary_artifacts().is_empty());
    }

    #[test]
    fn with_flag_javadoc_then_sources() {
        let mut pubs = Publications::new();
        let publication = configure_publishing(&library(), &mut pubs, "java", true).unwrap();
        let tasks: Vec<_> = publication
            .auxiliary_artifacts()
            .iter()
            .map(|a| a.task.as_str())
            .collect();
        assert_eq!(tasks, vec!["javadocJar", "sourcesJar"]);
    }

    #[test]
    fn missing_component_fails_and_registers_nothing() {
        let mut pubs = Publications::new();
        let err = configure_publishing(&library(), &mut pubs, "shadow", false).unwrap_err();
        assert_eq!(err.to_string(), "Component not found: shadow");
        assert!(pubs.is_empty());
    }

    #[test]
    fn missing_auxiliary_task_fails_and_registers_nothing() {
        let project = ProjectContext::new("common", "de.natrox", "1.0.0")
            .with_component(ArtifactComponent::java())
            .with_task(ArchiveTask::javadoc_jar());
        let mut pubs = Publications::new();
        let err = configure_publishing(&project, &mut pubs, "java", true).unwrap_err();
        assert_eq!(err.to_string(), "Component not found: sourcesJar");
        assert!(pubs.is_empty());
    }

    #[test]
    fn missing_tasks_are_fine_without_flag() {
        let project = ProjectContext::new("common", "de.natrox", "1.0.0")
            .with_component(ArtifactComponent::java());
        let mut pubs = Publications::new();
        assert!(configure_publishing(&project, &mut pubs, "java", false).is_ok());
    }

    #[test]
    fn second_registration_is_rejected() {
        let mut pubs = Publications::new();
        configure_publishing(&library(), &mut pubs, "java", false).unwrap();
        let err = configure_publishing(&library(), &mut pubs, "java", false).unwrap_err();
        assert!(err.to_string().contains("already registered"));
        assert_eq!(pubs.len(), 1);
    }

    #[test]
    fn unclassified_archives_are_rejected() {
        let project = ProjectContext::new("common", "de.natrox", "1.0.0")
            .with_component(ArtifactComponent::java())
            .with_task(ArchiveTask::new(JAVADOC_JAR_TASK, None, "jar"))
            .with_task(ArchiveTask::new(SOURCES_JAR_TASK, None, "jar"));
        let mut pubs = Publications::new();
        let err = configure_publishing(&project, &mut pubs, "java", true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Artifact from task 'javadocJar' collides with another artifact of the publication"
        );
        assert!(pubs.is_empty());
    }

    #[test]
    fn archives_sharing_a_classifier_are_rejected() {
        let project = ProjectContext::new("common", "de.natrox", "1.0.0")
            .with_component(ArtifactComponent::java())
            .with_task(ArchiveTask::new(JAVADOC_JAR_TASK, Some("docs".into()), "jar"))
            .with_task(ArchiveTask::new(SOURCES_JAR_TASK, Some("docs".into()), "jar"));
        let mut pubs = Publications::new();
        let err = configure_publishing(&project, &mut pubs, "java", true).unwrap_err();
        assert!(err.to_string().contains("'sourcesJar'"));
        assert!(pubs.is_empty());
    }

    #[test]
    fn same_classifier_with_other_extension_is_fine() {
        let project = ProjectContext::new("common", "de.natrox", "1.0.0")
            .with_component(ArtifactComponent::java())
            .with_task(ArchiveTask::new(JAVADOC_JAR_TASK, Some("docs".into()), "zip"))
            .with_task(ArchiveTask::new(SOURCES_JAR_TASK, Some("docs".into()), "jar"));
        let mut pubs = Publications::new();
        let publication = configure_publishing(&project, &mut pubs, "java", true).unwrap();
        assert_eq!(publication.files()[1].file_name, "common-1.0.0-docs.zip");
    }

    #[test]
    fn files_follow_maven_naming() {
        let mut pubs = Publications::new();
        let publication = configure_publishing(&library(), &mut pubs, "java", true).unwrap();
        let names: Vec<_> = publication
            .files()
            .into_iter()
            .map(|f| f.file_name)
            .collect();
        assert_eq!(
            names,
            vec![
                "common-1.0.0.jar",
                "common-1.0.0-javadoc.jar",
                "common-1.0.0-sources.jar",
                "common-1.0.0.pom",
            ]
        );
    }

    #[test]
    fn shadow_component_is_published() {
        let project = ProjectContext::new("eventbus", "de.natrox", "1.0.0")
            .with_component(ArtifactComponent::new("shadow", ComponentKind::Shadow))
            .with_repository(ArtifactRepository::maven_central());
        let mut pubs = Publications::new();
        let publication = configure_publishing(&project, &mut pubs, "shadow", false).unwrap();
        assert_eq!(publication.component().kind(), ComponentKind::Shadow);
        assert_eq!(publication.pom().repositories().len(), 1);
        assert_eq!(publication.files()[0].file_name, "eventbus-1.0.0.jar");
    }
}
