// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Utility functions shared by the CLI and the backend.

use std::path::{Path, PathBuf};

/// Find the next free run directory under `base`.
///
/// Mirrors the Ultralytics naming scheme: `base/prefix` if it does not exist yet,
/// then `base/prefix2`, `base/prefix3`, and so on.
///
/// # Arguments
///
/// * `base` - Project directory, e.g. `runs/detect`.
/// * `prefix` - Run name, e.g. `predict`.
#[must_use]
pub fn find_next_run_dir<P: AsRef<Path>>(base: P, prefix: &str) -> PathBuf {
    let base = base.as_ref();

    let first = base.join(prefix);
    if !first.exists() {
        return first;
    }

    (2..)
        .map(|i: u32| base.join(format!("{prefix}{i}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}
