use std::fs;
use tempfile::TempDir;

use pomcraft_core::manifest::{Manifest, RepositoryDecl};

#[test]
fn test_from_path_resolves_env_references() {
    let tmp = TempDir::new().unwrap();

    fs::write(
        tmp.path().join("Pomcraft.toml"),
        r#"
[project]
name = "env-test"
group = "de.natrox"
version = "1.0.0"
description = "${env:MY_LIB_DESC}"
"#,
    )
    .unwrap();

    fs::write(
        tmp.path().join(".pomcraft.env"),
        "MY_LIB_DESC=A great Java library\n",
    )
    .unwrap();

    let manifest = Manifest::from_path(&tmp.path().join("Pomcraft.toml")).unwrap();
    assert_eq!(
        manifest.project.description.as_deref(),
        Some("A great Java library")
    );
}

#[test]
fn test_from_path_without_env_file_still_works() {
    let tmp = TempDir::new().unwrap();

    fs::write(
        tmp.path().join("Pomcraft.toml"),
        r#"
[project]
name = "no-env"
group = "de.natrox"
version = "1.0.0"
"#,
    )
    .unwrap();

    let manifest = Manifest::from_path(&tmp.path().join("Pomcraft.toml"));
    assert!(manifest.is_ok());
}

#[test]
fn test_from_path_unresolved_env_refs_become_empty() {
    let tmp = TempDir::new().unwrap();

    fs::write(
        tmp.path().join("Pomcraft.toml"),
        r#"
[project]
name = "unresolved-test"
group = "de.natrox"
version = "1.0.0"
description = "${env:NONEXISTENT_VAR_12345}"
"#,
    )
    .unwrap();

    let manifest = Manifest::from_path(&tmp.path().join("Pomcraft.toml")).unwrap();
    assert_eq!(manifest.project.description.as_deref(), Some(""));
}

#[test]
fn test_from_path_env_used_in_repository_url() {
    let tmp = TempDir::new().unwrap();

    fs::write(
        tmp.path().join("Pomcraft.toml"),
        r#"
[project]
name = "repo-test"
group = "de.natrox"
version = "1.0.0"

[[repositories]]
name = "nexus"
url = "https://${env:NEXUS_HOST}/repository/maven-public"
"#,
    )
    .unwrap();

    fs::write(tmp.path().join(".pomcraft.env"), "NEXUS_HOST=nexus.example.com\n").unwrap();

    let manifest = Manifest::from_path(&tmp.path().join("Pomcraft.toml")).unwrap();
    match &manifest.repositories[0] {
        RepositoryDecl::Detailed { name, url } => {
            assert_eq!(name, "nexus");
            assert_eq!(url, "https://nexus.example.com/repository/maven-public");
        }
        other => panic!("expected detailed repository, got {other:?}"),
    }
}

#[test]
fn test_from_path_missing_file_is_manifest_error() {
    let tmp = TempDir::new().unwrap();
    let err = Manifest::from_path(&tmp.path().join("Pomcraft.toml")).unwrap_err();
    assert!(err.to_string().contains("Manifest error"), "got: {err}");
}

#[test]
fn test_from_path_env_value_with_reference_stays_literal() {
    let tmp = TempDir::new().unwrap();

    fs::write(
        tmp.path().join("Pomcraft.toml"),
        r#"
[project]
name = "${env:LIB_NAME}"
group = "de.natrox"
version = "1.0.0"
description = "${env:LIB_DESC} (${env:LIB_NAME})"
"#,
    )
    .unwrap();

    fs::write(
        tmp.path().join(".pomcraft.env"),
        "LIB_DESC=Uses ${env:LIB_NAME} internally\nLIB_NAME=common\n",
    )
    .unwrap();

    let manifest = Manifest::from_path(&tmp.path().join("Pomcraft.toml")).unwrap();
    assert_eq!(manifest.project.name, "common");
    assert_eq!(
        manifest.project.description.as_deref(),
        Some("Uses ${env:LIB_NAME} internally (common)")
    );
}
