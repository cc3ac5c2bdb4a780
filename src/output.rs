use std::path::{Path, PathBuf};

use crate::error::{Error, with_path};

/// File name of the `n`th page (1-based): `001.png`, `002.png`, ...
pub fn page_file_name(page_number: usize) -> String {
    format!("{page_number:03}.png")
}

pub fn page_path(dir: &Path, page_number: usize) -> PathBuf {
    dir.join(page_file_name(page_number))
}

/// Delete every file directly inside `dir`. Subdirectories are not entered
/// and are left in place.
///
/// Returns the number of entries removed.
pub fn clear_output_dir(dir: &Path) -> Result<usize, Error> {
    let mut removed = 0;
    for entry in std::fs::read_dir(dir).map_err(|e| with_path(e, dir))? {
        let entry = entry.map_err(|e| with_path(e, dir))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| with_path(e, &path))?;
        if file_type.is_dir() {
            log::warn!("Leaving subdirectory {} in output directory", path.display());
            continue;
        }
        std::fs::remove_file(&path).map_err(|e| with_path(e, &path))?;
        removed += 1;
    }
    log::debug!("clear_output_dir: removed {removed} entries from {}", dir.display());
    Ok(removed)
}

/// Make sure `dir` exists and holds no stale pages from an earlier run.
pub fn prepare_output_dir(dir: &Path) -> Result<(), Error> {
    if dir.exists() {
        clear_output_dir(dir)?;
    } else {
        std::fs::create_dir_all(dir).map_err(|e| with_path(e, dir))?;
    }
    Ok(())
}

pub fn write_page(dir: &Path, page_number: usize, bytes: &[u8]) -> Result<PathBuf, Error> {
    let path = page_path(dir, page_number);
    std::fs::write(&path, bytes).map_err(|e| with_path(e, &path))?;
    Ok(path)
}
