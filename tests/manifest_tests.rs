//! Tests for manifest discovery and descriptor parsing.

use shipkit::manifest::{self, ProjectDescriptor};
use std::fs;
use tempfile::TempDir;

#[test]
fn yaml_spelling_is_preferred_over_yml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("manifest.yaml"), b"yaml").unwrap();
    fs::write(dir.path().join("manifest.yml"), b"yml").unwrap();

    let found = manifest::find_manifest_file(dir.path()).unwrap();
    assert_eq!(found, dir.path().join("manifest.yaml"));
}

#[test]
fn yml_is_used_as_fallback() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("manifest.yml"), b"yml").unwrap();

    let found = manifest::find_manifest_file(dir.path()).unwrap();
    assert_eq!(found, dir.path().join("manifest.yml"));
}

#[test]
fn absence_is_none_not_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(manifest::find_manifest_file(dir.path()).is_none());
    assert!(manifest::find_deployment_file(dir.path()).is_none());
}

#[test]
fn a_directory_named_like_a_manifest_does_not_count() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("manifest.yaml")).unwrap();
    assert!(manifest::find_manifest_file(dir.path()).is_none());
}

#[test]
fn deployment_candidates_are_independent_of_manifest_ones() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("deployment.yaml"), b"d").unwrap();

    assert!(manifest::find_manifest_file(dir.path()).is_none());
    assert_eq!(
        manifest::find_deployment_file(dir.path()).unwrap(),
        dir.path().join("deployment.yaml")
    );
}

#[test]
fn descriptor_parses_annotations() {
    let yaml = b"project:\n  name: demo\n  version: 2.0.0\n  annotations:\n    - key: feed\n      value: /whisk.system/alarms\n";
    let descriptor = ProjectDescriptor::parse(yaml).unwrap();
    assert_eq!(descriptor.project.annotations.len(), 1);
    assert_eq!(descriptor.project.annotations[0].key, "feed");
}

#[test]
fn malformed_yaml_is_an_error() {
    assert!(ProjectDescriptor::parse(b"project: [unclosed").is_err());
}

#[test]
fn empty_project_name_is_rejected() {
    assert!(ProjectDescriptor::parse(b"project:\n  name: \"\"\n").is_err());
}
