//! Operation: configure the `maven` publication and write or plan it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use pomcraft_core::config::GlobalConfig;
use pomcraft_core::manifest::Manifest;
use pomcraft_core::project::ProjectContext;
use pomcraft_maven::conventions::PUBLICATION_NAME;
use pomcraft_maven::pom::PomMetadata;
use pomcraft_maven::publish::{configure_publishing, Publication, Publications, PublishedFile};
use pomcraft_maven::repository::MavenRepository;
use pomcraft_util::errors::PomcraftError;

/// Options that override the manifest and global config.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Forces auxiliary archives on or off.
    pub with_javadoc_and_sources: Option<bool>,
    /// Overrides the output directory, relative to the project root.
    pub output_dir: Option<PathBuf>,
}

/// A POM rendered for the project's publication.
#[derive(Debug, Clone)]
pub struct GeneratedPom {
    pub publication: Publication,
    pub xml: String,
    /// Where the POM was written, or `None` when only rendered.
    pub path: Option<PathBuf>,
}

/// Where a publication would be uploaded, without uploading anything.
#[derive(Debug, Clone, Serialize)]
pub struct PublishPlan {
    pub publication: String,
    pub coordinates: String,
    pub files: Vec<PublishedFile>,
    pub pom: PomMetadata,
    pub destinations: Vec<Destination>,
}

/// Upload targets within one secure repository.
#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    pub repository: String,
    pub urls: Vec<String>,
}

/// Load the project at `project_dir` and register its publication.
fn configure(
    project_dir: &Path,
    global: &GlobalConfig,
    opts: &PublishOptions,
) -> miette::Result<Publication> {
    let manifest = Manifest::from_path(&project_dir.join(pomcraft_core::MANIFEST_FILE))?;
    let project = ProjectContext::from_manifest(&manifest)?;

    let include_aux = opts
        .with_javadoc_and_sources
        .or_else(|| {
            manifest
                .publishing
                .as_ref()
                .and_then(|p| p.with_javadoc_and_sources)
        })
        .unwrap_or(global.publishing.with_javadoc_and_sources);

    let mut publications = Publications::new();
    let publication = configure_publishing(
        &project,
        &mut publications,
        manifest.published_component(),
        include_aux,
    )?;
    Ok(publication.clone())
}

/// Path of the generated POM: `<output-dir>/maven/pom-default.xml`.
pub fn pom_path(project_dir: &Path, global: &GlobalConfig, opts: &PublishOptions) -> PathBuf {
    let output_dir = opts
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&global.publishing.output_dir));
    project_dir
        .join(output_dir)
        .join(PUBLICATION_NAME)
        .join("pom-default.xml")
}

/// Render the POM and write it to the build directory.
pub fn generate_pom(
    project_dir: &Path,
    global: &GlobalConfig,
    opts: &PublishOptions,
) -> miette::Result<GeneratedPom> {
    let mut generated = render_pom(project_dir, global, opts)?;
    let path = pom_path(project_dir, global, opts);
    pomcraft_util::fs::write_atomic(&path, generated.xml.as_bytes()).map_err(|e| {
        PomcraftError::Generic {
            message: format!("Failed to write {}: {e}", path.display()),
        }
    })?;
    tracing::info!("Generated POM at {}", path.display());
    generated.path = Some(path);
    Ok(generated)
}

/// Render the POM without touching the filesystem.
pub fn render_pom(
    project_dir: &Path,
    global: &GlobalConfig,
    opts: &PublishOptions,
) -> miette::Result<GeneratedPom> {
    let publication = configure(project_dir, global, opts)?;
    let xml = publication.pom().to_xml()?;
    Ok(GeneratedPom {
        publication,
        xml,
        path: None,
    })
}

/// Describe what publishing would upload and where.
///
/// Only repositories listed in the POM (the secure ones) become destinations.
pub fn plan(
    project_dir: &Path,
    global: &GlobalConfig,
    opts: &PublishOptions,
) -> miette::Result<PublishPlan> {
    let publication = configure(project_dir, global, opts)?;
    let pom = publication.pom();
    let files = publication.files();

    let destinations = pom
        .repositories()
        .iter()
        .map(|entry| {
            let repo = MavenRepository::from(entry);
            let urls = files
                .iter()
                .map(|f| {
                    repo.file_url(pom.group_id(), pom.artifact_id(), pom.version(), &f.file_name)
                })
                .collect();
            Destination {
                repository: repo.name,
                urls,
            }
        })
        .collect();

    Ok(PublishPlan {
        publication: publication.name().to_string(),
        coordinates: format!("{}:{}:{}", pom.group_id(), pom.artifact_id(), pom.version()),
        files,
        pom: pom.clone(),
        destinations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const EVENTBUS: &str = r#"
repositories = [
    { name = "natrox", url = "https://repo.example.org/maven" },
    { name = "cache", url = "file:///local/cache" },
]

[project]
name = "eventbus"
group = "de.natrox"
version = "1.0.0-SNAPSHOT"
description = "An simple event bus for Java projects"

[tasks.javadocJar]
classifier = "javadoc"

[tasks.sourcesJar]
classifier = "sources"
"#;

    fn project(manifest: &str) -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Pomcraft.toml"), manifest).unwrap();
        tmp
    }

    #[test]
    fn generate_pom_writes_default_location() {
        let tmp = project(EVENTBUS);
        let generated =
            generate_pom(tmp.path(), &GlobalConfig::default(), &PublishOptions::default()).unwrap();

        let expected = tmp.path().join("build/publications/maven/pom-default.xml");
        assert_eq!(generated.path.as_deref(), Some(expected.as_path()));
        assert_eq!(fs::read_to_string(&expected).unwrap(), generated.xml);
        assert!(generated.publication.auxiliary_artifacts().is_empty());
    }

    #[test]
    fn cli_flag_overrides_manifest_and_global() {
        let tmp = project(&format!(
            "{EVENTBUS}\n[publishing]\nwith-javadoc-and-sources = false\n"
        ));
        let opts = PublishOptions {
            with_javadoc_and_sources: Some(true),
            output_dir: None,
        };
        let generated = render_pom(tmp.path(), &GlobalConfig::default(), &opts).unwrap();
        assert_eq!(generated.publication.auxiliary_artifacts().len(), 2);
        assert!(generated.path.is_none());
    }

    #[test]
    fn global_default_applies_when_manifest_is_silent() {
        let tmp = project(EVENTBUS);
        let mut global = GlobalConfig::default();
        global.publishing.with_javadoc_and_sources = true;
        let generated = render_pom(tmp.path(), &global, &PublishOptions::default()).unwrap();
        assert_eq!(generated.publication.auxiliary_artifacts().len(), 2);
    }

    #[test]
    fn output_dir_override() {
        let tmp = project(EVENTBUS);
        let opts = PublishOptions {
            with_javadoc_and_sources: None,
            output_dir: Some(PathBuf::from("out")),
        };
        let generated = generate_pom(tmp.path(), &GlobalConfig::default(), &opts).unwrap();
        assert!(tmp.path().join("out/maven/pom-default.xml").is_file());
        assert!(generated.path.unwrap().ends_with("out/maven/pom-default.xml"));
    }

    #[test]
    fn missing_aux_task_writes_nothing() {
        let tmp = project(
            r#"
[project]
name = "common"
group = "de.natrox"
version = "1.0.0"

[publishing]
with-javadoc-and-sources = true
"#,
        );
        let err = generate_pom(tmp.path(), &GlobalConfig::default(), &PublishOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Component not found: javadocJar");
        assert!(!tmp.path().join("build").exists());
    }

    #[test]
    fn bare_auxiliary_tasks_get_distinct_files() {
        let tmp = project(
            r#"
[project]
name = "common"
group = "de.natrox"
version = "1.0.0"

[tasks.javadocJar]
[tasks.sourcesJar]
"#,
        );
        let opts = PublishOptions {
            with_javadoc_and_sources: Some(true),
            output_dir: None,
        };
        let plan = plan(tmp.path(), &GlobalConfig::default(), &opts).unwrap();
        let names: Vec<_> = plan.files.iter().map(|f| f.file_name.as_str()).collect();
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
    fn plan_lists_secure_destinations() {
        let tmp = project(EVENTBUS);
        let opts = PublishOptions {
            with_javadoc_and_sources: Some(true),
            output_dir: None,
        };
        let plan = plan(tmp.path(), &GlobalConfig::default(), &opts).unwrap();

        assert_eq!(plan.publication, "maven");
        assert_eq!(plan.coordinates, "de.natrox:eventbus:1.0.0-SNAPSHOT");
        assert_eq!(plan.files.len(), 4);
        assert_eq!(plan.destinations.len(), 1);
        assert_eq!(plan.destinations[0].repository, "natrox");
        assert_eq!(
            plan.destinations[0].urls[1],
            "https://repo.example.org/maven/de/natrox/eventbus/1.0.0-SNAPSHOT/eventbus-1.0.0-SNAPSHOT-javadoc.jar"
        );
        assert!(!tmp.path().join("build").exists());
    }
}
