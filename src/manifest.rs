//! Manifest discovery and descriptor parsing.
//!
//! A project carries its configuration in a YAML manifest resolved by trying
//! fixed candidate filenames. A missing manifest is a valid state for a
//! caller to branch on, so discovery reports absence as `None` rather than
//! an error.

use crate::error::Error;
use crate::result::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME_YAML: &str = "manifest.yaml";
pub const MANIFEST_FILE_NAME_YML: &str = "manifest.yml";
pub const DEPLOYMENT_FILE_NAME_YAML: &str = "deployment.yaml";
pub const DEPLOYMENT_FILE_NAME_YML: &str = "deployment.yml";

/// Look for the project manifest, preferring the `.yaml` spelling.
pub fn find_manifest_file(project_dir: &Path) -> Option<PathBuf> {
    find_candidate(
        project_dir,
        &[MANIFEST_FILE_NAME_YAML, MANIFEST_FILE_NAME_YML],
    )
}

/// Look for the deployment file alongside the manifest.
pub fn find_deployment_file(project_dir: &Path) -> Option<PathBuf> {
    find_candidate(
        project_dir,
        &[DEPLOYMENT_FILE_NAME_YAML, DEPLOYMENT_FILE_NAME_YML],
    )
}

fn find_candidate(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names.iter().map(|name| dir.join(name)).find(|p| p.is_file())
}

/// Parsed project descriptor, the YAML manifest's top-level shape.
#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectDescriptor {
    pub project: Project,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub annotations: Vec<KeyValue>,
}

/// A single annotation entry on a project or deployment record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: serde_json::Value,
}

/// Summary of a completed packaging run, printed in verbose mode.
#[derive(Debug, Serialize)]
pub struct DeploymentRecord {
    pub name: String,
    pub version: String,
    pub archive: PathBuf,
    pub annotations: Vec<KeyValue>,
}

impl ProjectDescriptor {
    /// Parse a descriptor from raw manifest bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let descriptor: Self = serde_yaml::from_slice(bytes)?;
        if descriptor.project.name.is_empty() {
            return Err(Error::InvalidManifest(
                "project name must not be empty".to_string(),
            ));
        }
        Ok(descriptor)
    }
}

/// Append a key/value entry to an annotation list.
pub fn add_key_value(list: &mut Vec<KeyValue>, key: &str, value: serde_json::Value) {
    list.push(KeyValue {
        key: key.to_string(),
        value,
    });
}

/// Remove the first entry matching `key`, if any.
pub fn delete_key(list: &mut Vec<KeyValue>, key: &str) {
    if let Some(index) = list.iter().position(|kv| kv.key == key) {
        list.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_then_delete_key() {
        let mut list = Vec::new();
        add_key_value(&mut list, "feed", json!("/whisk.system/alarms"));
        add_key_value(&mut list, "memory", json!(256));
        assert_eq!(list.len(), 2);

        delete_key(&mut list, "feed");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].key, "memory");
    }

    #[test]
    fn delete_key_removes_first_match_only() {
        let mut list = Vec::new();
        add_key_value(&mut list, "tag", json!("a"));
        add_key_value(&mut list, "tag", json!("b"));

        delete_key(&mut list, "tag");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].value, json!("b"));
    }

    #[test]
    fn delete_missing_key_is_a_no_op() {
        let mut list = vec![KeyValue {
            key: "keep".to_string(),
            value: json!(true),
        }];
        delete_key(&mut list, "absent");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn parse_descriptor_from_yaml() {
        let yaml = b"project:\n  name: hello\n  version: 1.2.0\n";
        let descriptor = ProjectDescriptor::parse(yaml).unwrap();
        assert_eq!(descriptor.project.name, "hello");
        assert_eq!(descriptor.project.version.as_deref(), Some("1.2.0"));
        assert!(descriptor.project.annotations.is_empty());
    }
}
