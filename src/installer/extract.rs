//! Archive extraction and executable discovery
//!
//! Release archives wrap the binary in a directory named after the
//! artifact (e.g. `bun-linux-x64/bun`), and workflow-run artifacts wrap a
//! zip inside another zip. Discovery is a depth-first traversal that
//! unwraps nested `bun*` directories and archives until the executable is
//! found, with an explicit depth bound so malformed archives terminate.

use std::fs::File;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, executable_not_found, extract};

/// Maximum nesting of archives-within-archives to unwrap
pub const MAX_UNWRAP_DEPTH: usize = 4;

/// Directory depth searched within one extracted tree
const MAX_WALK_DEPTH: usize = 8;

/// Ensure a downloaded file carries the given extension, renaming it when
/// necessary. Applying this twice is a no-op, not a double-append.
pub fn add_extension(path: &Path, extension: &str) -> std::io::Result<PathBuf> {
    let already = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension.trim_start_matches('.')));
    if already {
        return Ok(path.to_path_buf());
    }
    let mut renamed = path.as_os_str().to_os_string();
    renamed.push(extension);
    let renamed = PathBuf::from(renamed);
    std::fs::rename(path, &renamed)?;
    Ok(renamed)
}

/// Extract a zip archive into `dest`
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<()> {
    let file =
        File::open(archive_path).map_err(|err| extract::failed(archive_path, err.to_string()))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|err| extract::failed(archive_path, err.to_string()))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|err| extract::failed(archive_path, err.to_string()))?;
        let Some(relative) = entry.enclosed_name() else {
            // Entries escaping the destination are skipped, not extracted
            continue;
        };
        let outpath = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&outpath)
                .map_err(|err| extract::failed(archive_path, err.to_string()))?;
        } else {
            if let Some(parent) = outpath.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|err| extract::failed(archive_path, err.to_string()))?;
            }
            let mut outfile = File::create(&outpath)
                .map_err(|err| extract::failed(archive_path, err.to_string()))?;
            std::io::copy(&mut entry, &mut outfile)
                .map_err(|err| extract::failed(archive_path, err.to_string()))?;
        }
    }
    Ok(())
}

/// Find the bun executable within an extracted tree
///
/// Fails when the search exhausts without finding one.
pub fn find_executable(dir: &Path) -> Result<PathBuf> {
    search(dir, 0)?.ok_or_else(executable_not_found)
}

fn search(dir: &Path, depth: usize) -> Result<Option<PathBuf>> {
    if depth > MAX_UNWRAP_DEPTH {
        return Ok(None);
    }

    let walker = WalkDir::new(dir)
        .max_depth(MAX_WALK_DEPTH)
        .into_iter()
        .filter_entry(|entry| {
            // Only descend into directories named after the artifact
            entry.depth() == 0 || !entry.file_type().is_dir() || has_bun_prefix(entry.file_name())
        });

    let mut nested_archives = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| extract::failed(dir, err.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name == "bun" || name == "bun.exe" {
            return Ok(Some(entry.into_path()));
        }
        if has_bun_prefix(entry.file_name()) && name.ends_with(".zip") {
            nested_archives.push(entry.into_path());
        }
    }

    // Workflow artifacts wrap the release zip in an outer zip
    for archive in nested_archives {
        let nested_dir = archive.with_extension("unwrapped");
        extract_archive(&archive, &nested_dir)?;
        if let Some(found) = search(&nested_dir, depth + 1)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

fn has_bun_prefix(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with("bun")
}
