//! POM metadata for a publication and its XML serialization.
//!
//! [`PomMetadata::build`] makes every decision about what goes into the
//! document (which repositories qualify, what the description is), and
//! [`PomMetadata::to_xml`] renders the finished value in a single pass.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;

use pomcraft_core::component::ArtifactComponent;
use pomcraft_core::project::ProjectContext;
use pomcraft_util::errors::PomcraftError;

use crate::conventions;

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";
const MODEL_VERSION: &str = "4.0.0";

/// Immutable POM content for one publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomMetadata {
    group_id: String,
    artifact_id: String,
    version: String,
    packaging: String,
    name: String,
    description: String,
    licenses: Vec<PomLicense>,
    developers: Vec<PomDeveloper>,
    scm: PomScm,
    issue_management: PomIssueManagement,
    repositories: Vec<PomRepository>,
}

/// A developer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomDeveloper {
    pub id: String,
    pub email: String,
    pub timezone: String,
}

/// A license entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomLicense {
    pub name: String,
    pub url: String,
}

/// Source control coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomScm {
    pub tag: String,
    pub url: String,
    pub connection: String,
    pub developer_connection: String,
}

/// Issue tracker coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomIssueManagement {
    pub system: String,
    pub url: String,
}

/// A `<repository>` entry advertised to consumers of the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomRepository {
    pub id: String,
    pub url: String,
}

impl PomMetadata {
    /// Build the POM for `component` of `project`.
    ///
    /// Only repositories whose URL uses the secure scheme are listed, in
    /// registration order and without deduplication.
    pub fn build(project: &ProjectContext, component: &ArtifactComponent) -> Self {
        let repositories = project
            .repositories
            .iter()
            .filter(|repo| {
                let keep = repo.is_secure();
                if !keep {
                    tracing::debug!(
                        "Skipping repository '{}' in POM: {} is not an https URL",
                        repo.name,
                        repo.url
                    );
                }
                keep
            })
            .map(|repo| PomRepository {
                id: repo.name.clone(),
                url: repo.url.clone(),
            })
            .collect();

        Self {
            group_id: project.group.clone(),
            artifact_id: project.name.clone(),
            version: project.version.clone(),
            packaging: component.packaging().to_string(),
            name: project.name.clone(),
            description: project.description_or_empty().to_string(),
            licenses: vec![conventions::license()],
            developers: vec![conventions::developer()],
            scm: conventions::scm(),
            issue_management: conventions::issue_management(),
            repositories,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn licenses(&self) -> &[PomLicense] {
        &self.licenses
    }

    pub fn developers(&self) -> &[PomDeveloper] {
        &self.developers
    }

    pub fn scm(&self) -> &PomScm {
        &self.scm
    }

    pub fn issue_management(&self) -> &PomIssueManagement {
        &self.issue_management
    }

    pub fn repositories(&self) -> &[PomRepository] {
        &self.repositories
    }

    /// Render the POM as an indented XML document.
    pub fn to_xml(&self) -> miette::Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        self.write_to(&mut writer)?;
        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        String::from_utf8(bytes).map_err(xml_error)
    }

    fn write_to<W: Write>(&self, w: &mut Writer<W>) -> miette::Result<()> {
        w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;

        let project = BytesStart::new("project").with_attributes([
            ("xmlns", POM_NAMESPACE),
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xsi:schemaLocation", POM_SCHEMA_LOCATION),
        ]);
        w.write_event(Event::Start(project)).map_err(xml_error)?;

        text_element(w, "modelVersion", MODEL_VERSION)?;
        text_element(w, "groupId", &self.group_id)?;
        text_element(w, "artifactId", &self.artifact_id)?;
        text_element(w, "version", &self.version)?;
        text_element(w, "packaging", &self.packaging)?;
        text_element(w, "name", &self.name)?;
        text_element(w, "description", &self.description)?;

        start(w, "licenses")?;
        for license in &self.licenses {
            start(w, "license")?;
            text_element(w, "name", &license.name)?;
            text_element(w, "url", &license.url)?;
            end(w, "license")?;
        }
        end(w, "licenses")?;

        start(w, "developers")?;
        for dev in &self.developers {
            start(w, "developer")?;
            text_element(w, "id", &dev.id)?;
            text_element(w, "email", &dev.email)?;
            text_element(w, "timezone", &dev.timezone)?;
            end(w, "developer")?;
        }
        end(w, "developers")?;

        start(w, "scm")?;
        text_element(w, "connection", &self.scm.connection)?;
        text_element(w, "developerConnection", &self.scm.developer_connection)?;
        text_element(w, "tag", &self.scm.tag)?;
        text_element(w, "url", &self.scm.url)?;
        end(w, "scm")?;

        start(w, "issueManagement")?;
        text_element(w, "system", &self.issue_management.system)?;
        text_element(w, "url", &self.issue_management.url)?;
        end(w, "issueManagement")?;

        // Always present, even when empty, so consumers see an explicit list.
        start(w, "repositories")?;
        for repo in &self.repositories {
            start(w, "repository")?;
            text_element(w, "id", &repo.id)?;
            text_element(w, "url", &repo.url)?;
            end(w, "repository")?;
        }
        end(w, "repositories")?;

        end(w, "project")
    }
}

fn start<W: Write>(w: &mut Writer<W>, tag: &str) -> miette::Result<()> {
    w.write_event(Event::Start(BytesStart::new(tag)))
        .map_err(xml_error)
}

fn end<W: Write>(w: &mut Writer<W>, tag: &str) -> miette::Result<()> {
    w.write_event(Event::End(BytesEnd::new(tag)))
        .map_err(xml_error)
}

fn text_element<W: Write>(w: &mut Writer<W>, tag: &str, text: &str) -> miette::Result<()> {
    start(w, tag)?;
    w.write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    end(w, tag)
}

fn xml_error(e: impl std::fmt::Display) -> miette::Report {
    PomcraftError::Xml {
        message: e.to_string(),
    }
    .into()
}
