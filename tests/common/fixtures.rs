// Fixture loading utilities for test data

use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{}.json", name))
}

/// Load a JSON fixture from the tests/fixtures/ directory
///
/// # Panics
/// Panics if the fixture file doesn't exist or contains invalid JSON
pub fn load_fixture(name: &str) -> Value {
    let path = fixture_path(name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read fixture file: {}", path.display()));

    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {} as JSON: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_load() {
        assert!(load_fixture("logs_page")["data"].is_array());
        assert_eq!(load_fixture("monitors").as_array().unwrap().len(), 3);
    }
}
