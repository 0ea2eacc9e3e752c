//! Flat-file helpers shared by the pool and the buckets.
//!
//! Every write replaces the target atomically; every read rejects NUL bytes
//! and non-UTF-8 content before any parsing happens.

use crate::error::{StoreError, io_error};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Copy `master` to `working` when `working` does not exist yet.
///
/// Returns whether a copy happened.
pub fn seed_from_master(working: &Path, master: &Path) -> Result<bool, StoreError> {
    if working.exists() {
        return Ok(false);
    }
    if !master.is_file() {
        return Err(StoreError::MissingMasterFile {
            path: master.display().to_string(),
        });
    }
    fs::copy(master, working).map_err(io_error("seed", working))?;
    log::info!("seeded {} from {}", working.display(), master.display());
    Ok(true)
}

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String, StoreError> {
    let bytes = fs::read(path).map_err(io_error("read", path))?;
    if bytes.contains(&0) {
        return Err(StoreError::Corrupt(format!(
            "{}: contains NUL byte(s)",
            path.display()
        )));
    }
    String::from_utf8(bytes).map_err(|_| {
        StoreError::Corrupt(format!(
            "{}: contains non-UTF-8 byte sequence(s)",
            path.display()
        ))
    })
}

/// Non-empty lines of a text file.
pub fn read_lines(path: &Path) -> Result<Vec<String>, StoreError> {
    Ok(read_text(path)?
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

pub fn count_lines(path: &Path) -> Result<usize, StoreError> {
    Ok(read_lines(path)?.len())
}

/// Replace `path` with `contents`.
///
/// The bytes go to a hidden sibling first and only become visible through
/// the final rename, so readers never observe a partial file.
pub fn write_text(path: &Path, contents: &str) -> Result<(), StoreError> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent).map_err(io_error("create directory", parent))?;
    }

    let staged = StagedFile::beside(path);
    let mut file = File::create(&staged.path).map_err(io_error("create", &staged.path))?;
    file.write_all(contents.as_bytes())
        .map_err(io_error("write", &staged.path))?;
    file.sync_all().map_err(io_error("sync", &staged.path))?;
    drop(file);
    staged.commit(path)?;

    if let Some(parent) = parent {
        File::open(parent)
            .and_then(|dir| dir.sync_all())
            .map_err(io_error("sync directory", parent))?;
    }
    Ok(())
}

/// A hidden sibling of the target; removed on drop unless committed.
struct StagedFile {
    path: PathBuf,
    committed: bool,
}

impl StagedFile {
    fn beside(target: &Path) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path: target.with_file_name(format!(".{name}.{}-{unique}.tmp", std::process::id())),
            committed: false,
        }
    }

    fn commit(mut self, target: &Path) -> Result<(), StoreError> {
        fs::rename(&self.path, target).map_err(io_error("replace", target))?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}
