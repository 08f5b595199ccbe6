//! Reading the version specifier from project files
//!
//! Supported formats:
//! - `.bun-version` (or any plain file): the trimmed file content
//! - `.tool-versions`: the version column of the `bun` row
//! - `package.json`: `.packageManager` (`bun@<version>`) or `.engines.bun`

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, file_read_failed};

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(rename = "packageManager")]
    package_manager: Option<String>,
    engines: Option<Engines>,
}

#[derive(Debug, Deserialize)]
struct Engines {
    bun: Option<String>,
}

/// Read a version specifier from a project file
///
/// Returns `None` when the file exists but names no bun version.
pub fn read_version_from_file(path: &Path) -> Result<Option<String>> {
    let contents =
        std::fs::read_to_string(path).map_err(|err| file_read_failed(path, err.to_string()))?;

    let version = match path.file_name().and_then(|name| name.to_str()) {
        Some("package.json") => parse_package_json(path, &contents)?,
        Some(".tool-versions") => parse_tool_versions(&contents),
        _ => {
            let trimmed = contents.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
    };
    Ok(version)
}

fn parse_package_json(path: &Path, contents: &str) -> Result<Option<String>> {
    let package: PackageJson =
        serde_json::from_str(contents).map_err(|err| file_read_failed(path, err.to_string()))?;

    if let Some(manager) = package.package_manager {
        if let Some(version) = manager.strip_prefix("bun@") {
            return Ok(Some(version.to_string()));
        }
    }
    Ok(package.engines.and_then(|engines| engines.bun))
}

fn parse_tool_versions(contents: &str) -> Option<String> {
    contents.lines().find_map(|line| {
        let mut fields = line.split_whitespace();
        (fields.next() == Some("bun")).then(|| fields.next().map(String::from))?
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_bun_version_file() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, ".bun-version", "1.2.3\n");
        assert_eq!(
            read_version_from_file(&path).unwrap(),
            Some("1.2.3".to_string())
        );
    }

    #[test]
    fn test_empty_version_file_yields_none() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, ".bun-version", "  \n");
        assert_eq!(read_version_from_file(&path).unwrap(), None);
    }

    #[test]
    fn test_tool_versions_bun_row() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, ".tool-versions", "nodejs 20.0.0\nbun 1.1.0\n");
        assert_eq!(
            read_version_from_file(&path).unwrap(),
            Some("1.1.0".to_string())
        );
    }

    #[test]
    fn test_tool_versions_without_bun_row() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, ".tool-versions", "nodejs 20.0.0\n");
        assert_eq!(read_version_from_file(&path).unwrap(), None);
    }

    #[test]
    fn test_package_json_package_manager() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "package.json", r#"{"packageManager": "bun@1.2.0"}"#);
        assert_eq!(
            read_version_from_file(&path).unwrap(),
            Some("1.2.0".to_string())
        );
    }

    #[test]
    fn test_package_json_engines() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "package.json", r#"{"engines": {"bun": "^1.0.0"}}"#);
        assert_eq!(
            read_version_from_file(&path).unwrap(),
            Some("^1.0.0".to_string())
        );
    }

    #[test]
    fn test_package_json_other_package_manager_ignored() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "package.json", r#"{"packageManager": "pnpm@9.0.0"}"#);
        assert_eq!(read_version_from_file(&path).unwrap(), None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = read_version_from_file(&temp.path().join("absent"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_package_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "package.json", "{ not json");
        assert!(read_version_from_file(&path).is_err());
    }
}
