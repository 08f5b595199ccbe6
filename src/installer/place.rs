//! Placing the extracted binary into its final path

use std::fs;
use std::path::Path;

use crate::error::{Result, file_write_failed};

/// Move the extracted binary into the install path
///
/// An atomic rename is attempted first. Rename fails across filesystems
/// (`EXDEV`-class errors, common when the temp dir and home live on
/// different mounts), in which case a plain copy is the intended fallback.
pub fn place_binary(src: &Path, dest: &Path) -> Result<()> {
    if fs::rename(src, dest).is_err() {
        fs::copy(src, dest).map_err(|err| file_write_failed(dest, err.to_string()))?;
    }
    make_executable(dest)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|err| file_write_failed(path, err.to_string()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Create the `bunx` alias pointing at the installed executable
///
/// A pre-existing alias is fine (the install path is stable across runs);
/// any other filesystem error propagates.
pub fn create_alias(bun_path: &Path, alias_path: &Path) -> Result<()> {
    match symlink(bun_path, alias_path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(err) => Err(file_write_failed(alias_path, err.to_string())),
    }
}

#[cfg(unix)]
fn symlink(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn symlink(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(original, link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_place_binary_moves_file() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("extracted-bun");
        let dest = temp.path().join("bun");
        fs::write(&src, "binary").unwrap();

        place_binary(&src, &dest).unwrap();
        assert!(dest.is_file());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "binary");
    }

    #[cfg(unix)]
    #[test]
    fn test_place_binary_sets_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let src = temp.path().join("extracted-bun");
        let dest = temp.path().join("bun");
        fs::write(&src, "binary").unwrap();

        place_binary(&src, &dest).unwrap();
        let mode = fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn test_place_binary_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("extracted-bun");
        let dest = temp.path().join("bun");
        fs::write(&src, "new").unwrap();
        fs::write(&dest, "old").unwrap();

        place_binary(&src, &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_create_alias_tolerates_existing() {
        let temp = TempDir::new().unwrap();
        let bun = temp.path().join("bun");
        let alias = temp.path().join("bunx");
        fs::write(&bun, "binary").unwrap();

        create_alias(&bun, &alias).unwrap();
        assert!(alias.exists());

        // Second invocation finds the alias already present
        create_alias(&bun, &alias).unwrap();
    }
}
