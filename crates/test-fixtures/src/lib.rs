//! Test fixture loader for Vigil golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them from any crate's tests.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;
use vigil_core::FieldKind;

/// Root directory of the fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until a sibling
    // `test-fixtures` directory appears.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// A file of golden validation scenarios.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenFile {
    pub description: String,
    pub cases: Vec<GoldenCase>,
}

/// One input and what the engine must say about it.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub name: String,
    pub kind: FieldKind,
    pub input: String,
    pub expected: Expectation,
}

/// Expected outcome. Absent fields are not checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Expectation {
    pub valid: Option<bool>,
    pub confidence: Option<f64>,
    pub risk: Option<f64>,
    pub suggestion: Option<String>,
    pub no_suggestion: bool,
    pub formatted: Option<String>,
    pub issue_contains: Vec<String>,
    pub no_issues: bool,
    pub sentiment: Option<String>,
}

/// Load every golden file under `golden/`.
pub fn load_golden() -> Vec<(String, GoldenFile)> {
    list_fixtures("golden")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let file = load_fixture(&format!("golden/{name}"));
            (name, file)
        })
        .collect()
}
