//! Locating the runtime data directory (sample world, intro text, default config).

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
///
/// `KERNO_DATA_DIR` wins when set. Otherwise the workspace layout, a
/// flattened `data/`, and directories next to the executable are tried in turn.
fn detect_data_root() -> PathBuf {
    if let Some(dir) = env::var_os("KERNO_DATA_DIR") {
        return PathBuf::from(dir);
    }

    let mut candidates = vec![PathBuf::from("kerno_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("kerno_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("kerno_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("kerno_engine/data"))
}
