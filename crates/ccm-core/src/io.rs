use crate::error::Result;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sibling temp path used by [`atomic_write`]: `path` with `.tmp` appended.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Atomically write `data` to `path` via `path.tmp` and a rename.
///
/// Readers observe either the old file or the new one, never a partial write.
/// If writing the temp file fails it is removed and the original is left alone.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let tmp = temp_path(path);
    if let Err(e) = write_temp(&tmp, data) {
        if let Err(cleanup) = std::fs::remove_file(&tmp) {
            if cleanup.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %tmp.display(), error = %cleanup, "failed to remove temp file");
            }
        }
        return Err(e.into());
    }
    std::fs::rename(&tmp, path)?;
    Ok(())
}

fn write_temp(tmp: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut f = std::fs::File::create(tmp)?;
    f.write_all(data)?;
    f.sync_all()
}
