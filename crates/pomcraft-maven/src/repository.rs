//! Maven repository layout: coordinate paths, file names, upload URLs.

use crate::pom::PomRepository;

/// A remote Maven repository that artifacts would be deployed to.
#[derive(Debug, Clone)]
pub struct MavenRepository {
    pub name: String,
    pub url: String,
}

impl From<&PomRepository> for MavenRepository {
    /// Drops any trailing `/` so file URLs join cleanly.
    fn from(entry: &PomRepository) -> Self {
        Self {
            name: entry.id.clone(),
            url: entry.url.trim_end_matches('/').to_string(),
        }
    }
}

impl MavenRepository {
    /// Standard Maven layout path for a given coordinate.
    ///
    /// `de.natrox:eventbus:1.0.0` becomes `de/natrox/eventbus/1.0.0`
    pub fn coordinate_path(group: &str, artifact: &str, version: &str) -> String {
        format!("{}/{}/{}", group.replace('.', "/"), artifact, version)
    }

    /// File name of an artifact: `<artifact>-<version>[-<classifier>].<extension>`.
    pub fn file_name(
        artifact: &str,
        version: &str,
        classifier: Option<&str>,
        extension: &str,
    ) -> String {
        match classifier {
            Some(c) => format!("{artifact}-{version}-{c}.{extension}"),
            None => format!("{artifact}-{version}.{extension}"),
        }
    }

    /// Full URL to a specific file within the Maven repository.
    pub fn file_url(&self, group: &str, artifact: &str, version: &str, filename: &str) -> String {
        format!(
            "{}/{}/{}",
            self.url,
            Self::coordinate_path(group, artifact, version),
            filename
        )
    }

    /// URL to the POM file for a given coordinate.
    pub fn pom_url(&self, group: &str, artifact: &str, version: &str) -> String {
        let filename = Self::file_name(artifact, version, None, "pom");
        self.file_url(group, artifact, version, &filename)
    }
}
