//! Artifact repositories registered on a project.

use crate::config::home_dir;
use crate::manifest::RepositoryDecl;
use pomcraft_util::errors::PomcraftError;

/// URL scheme that marks a repository as reachable over an encrypted transport.
pub const SECURE_SCHEME: &str = "https://";

/// Maven Central base URL, as registered by the `mavenCentral` shorthand.
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2/";

/// A repository the project resolves from or publishes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRepository {
    pub name: String,
    pub url: String,
}

impl ArtifactRepository {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// `mavenCentral`: the public Maven Central repository.
    pub fn maven_central() -> Self {
        Self::new("MavenRepo", MAVEN_CENTRAL_URL)
    }

    /// `mavenLocal`: the user's `~/.m2/repository` cache.
    pub fn maven_local() -> Self {
        let path = home_dir().join(".m2").join("repository");
        Self::new("MavenLocal", format!("file:{}", path.display()))
    }

    /// Build a repository from its manifest declaration.
    pub fn from_decl(decl: &RepositoryDecl) -> miette::Result<Self> {
        match decl {
            RepositoryDecl::Shorthand(name) => match name.as_str() {
                "mavenCentral" => Ok(Self::maven_central()),
                "mavenLocal" => Ok(Self::maven_local()),
                other => Err(PomcraftError::Manifest {
                    message: format!(
                        "Unknown repository shorthand '{other}' (expected mavenCentral or mavenLocal)"
                    ),
                }
                .into()),
            },
            RepositoryDecl::Detailed { name, url } => Ok(Self::new(name.as_str(), url.as_str())),
        }
    }

    /// Whether the URL uses the secure transport scheme. Anything that does
    /// not literally start with `https://` counts as insecure.
    pub fn is_secure(&self) -> bool {
        self.url.starts_with(SECURE_SCHEME)
    }
}
