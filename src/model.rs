//! # Document I/O
//!
//! The editor model owns the association with the file currently being
//! edited and moves plain text between that file and memory.
//!
//! The handle starts out unbound ("unsaved new document") and is bound by
//! opening a file or by a successful save-as. Reads and writes are
//! synchronous whole-file operations; a write is a direct overwrite with
//! no atomic rename and no backup copy.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{EditorError, Result};

/// Owns the current file handle and performs whole-file reads and writes
/// against it.
#[derive(Debug, Default)]
pub struct EditorModel {
    current_file: Option<PathBuf>,
}

impl EditorModel {
    pub fn new() -> Self {
        Self { current_file: None }
    }

    /// Records the handle. Does not touch the disk.
    pub fn set_current_file(&mut self, path: PathBuf) {
        self.current_file = Some(path);
    }

    /// The bound path, for display. `None` while unbound.
    pub fn current_file_path(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.current_file.is_some()
    }

    /// Reads the bound file and returns its lines in order.
    pub fn read_current_file(&self) -> Result<Vec<String>> {
        let path = self.current_file.as_deref().ok_or(EditorError::NoFile)?;
        read_lines(path)
    }

    /// Overwrites the bound file's entire contents with `text`.
    pub fn write_current_file(&self, text: &str) -> Result<()> {
        let path = self.current_file.as_deref().ok_or(EditorError::NoFile)?;
        write_text(path, text)
    }
}

/// Reads every line of `path`, preserving order.
///
/// Kept separate from the model so callers can load a candidate file
/// before committing a handle change; a failed open then leaves the
/// previous handle and buffer intact.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = fs::File::open(path).map_err(|e| EditorError::file_access(path, e))?;
    let reader = BufReader::new(file);

    reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|e| EditorError::file_access(path, e))
}

/// Overwrites `path` with `text` verbatim.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    let mut file = fs::File::create(path).map_err(|e| EditorError::file_access(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| EditorError::file_access(path, e))?;
    Ok(())
}
