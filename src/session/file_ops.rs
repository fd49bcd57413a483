//! File operations: open and save the document.

use super::EditorSession; // session state
use anyhow::{Context, Result}; // anyhow error handling
use log::info; // load/save reporting
use std::fs::{self, File}; // file system access and file handle
use std::io::BufWriter; // buffered writing
use std::path::{Path, PathBuf}; // file path handling

/// Append `.txt` unless `name` already ends with it (any case).
pub fn normalize_file_name(name: &str) -> PathBuf {
    let has_txt = name
        .len()
        .checked_sub(4)
        .and_then(|i| name.get(i..))
        .is_some_and(|ext| ext.eq_ignore_ascii_case(".txt"));
    if has_txt {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.txt"))
    }
}

impl EditorSession {
    /// Load a file into the buffer verbatim. History is cleared.
    ///
    /// On failure the session is left untouched.
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        self.replace_all(&s);
        self.file_path = Some(path.to_path_buf());
        self.dirty = false;
        info!("opened {} ({} chars)", path.display(), self.buf.len());
        Ok(())
    }

    /// Write the buffer verbatim to `path` and remember it as the document's path.
    pub fn save_to_path(&mut self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let writer = BufWriter::new(file);
        self.buf
            .write_to(writer)
            .with_context(|| format!("Failed writing {}", path.display()))?;
        self.file_path = Some(path.to_path_buf());
        self.dirty = false;
        info!("saved {} ({} chars)", path.display(), self.buf.len());
        Ok(())
    }
}
