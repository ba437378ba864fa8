//! Fixed metadata stamped onto every publication.

use crate::pom::{PomDeveloper, PomIssueManagement, PomLicense, PomScm};

/// Identifier of the one publication registered per project.
pub const PUBLICATION_NAME: &str = "maven";

/// `<developer><id>` of the sole maintainer.
pub const DEVELOPER_ID: &str = "drolpi";
/// `<developer><email>`.
pub const DEVELOPER_EMAIL: &str = "drolpiofficial@gmail.com";
/// `<developer><timezone>`, an IANA zone name.
pub const DEVELOPER_TIMEZONE: &str = "Europe/Berlin";

/// Every publication is released under Apache-2.0.
pub const LICENSE_NAME: &str = "Apache License, Version 2.0";
/// Canonical text of [`LICENSE_NAME`].
pub const LICENSE_URL: &str = "https://opensource.org/licenses/Apache-2.0";

/// Published POMs always track the branch head, never a release tag.
pub const SCM_TAG: &str = "HEAD";
/// Browsable location of the source repository.
pub const SCM_URL: &str = "git@github.com:AeroService/Common.git";
/// Maven SCM connection string, also used as the developer connection.
pub const SCM_CONNECTION: &str = "scm:git:git@github.com:AeroService/Common.git";

/// `<issueManagement><system>`.
pub const ISSUE_SYSTEM: &str = "GitHub Issues";
/// Where bugs against published artifacts are reported.
pub const ISSUE_URL: &str = "https://github.com/AeroService/Common/issues";

/// The single developer entry listed in every POM.
pub fn developer() -> PomDeveloper {
    PomDeveloper {
        id: DEVELOPER_ID.to_string(),
        email: DEVELOPER_EMAIL.to_string(),
        timezone: DEVELOPER_TIMEZONE.to_string(),
    }
}

/// The Apache-2.0 license block.
pub fn license() -> PomLicense {
    PomLicense {
        name: LICENSE_NAME.to_string(),
        url: LICENSE_URL.to_string(),
    }
}

/// Tag, url, connection and developer connection all point at the same repository.
pub fn scm() -> PomScm {
    PomScm {
        tag: SCM_TAG.to_string(),
        url: SCM_URL.to_string(),
        connection: SCM_CONNECTION.to_string(),
        developer_connection: SCM_CONNECTION.to_string(),
    }
}

/// Issue tracker block pointing at GitHub Issues.
pub fn issue_management() -> PomIssueManagement {
    PomIssueManagement {
        system: ISSUE_SYSTEM.to_string(),
        url: ISSUE_URL.to_string(),
    }
}
