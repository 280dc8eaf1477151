//! Ensure only one boulder-server instance serves a given store.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// A lock guard that releases the lock when dropped
pub struct LockGuard {
    _file: File,
}

/// Lock file lives next to the store: `appointments.csv` -> `appointments.csv.lock`
fn lock_path(store_path: &Path) -> Result<PathBuf> {
    if let Some(dir) = store_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let mut name = store_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Store path has no file name: {}", store_path.display()))?
        .to_os_string();
    name.push(".lock");

    Ok(store_path.with_file_name(name))
}

/// Acquire an exclusive lock, failing if another instance is running
pub fn acquire_lock(store_path: &Path) -> Result<LockGuard> {
    let path = lock_path(store_path)?;
    let file = File::create(&path).context("Failed to create lock file")?;

    file.try_lock_exclusive().map_err(|_| {
        anyhow::anyhow!(
            "Another boulder-server instance is already serving this store.\n\
            If you believe this is an error, remove: {}",
            path.display()
        )
    })?;

    Ok(LockGuard { _file: file })
}
