//! Note storage

use crate::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One entry of the export directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub file_name: String,
    pub is_dir: bool,
}

impl NoteEntry {
    pub fn new(file_name: String, is_dir: bool) -> Self {
        NoteEntry { file_name, is_dir }
    }
}

/// Where notes are listed, read, written and renamed
pub trait NoteStore {
    /// Directory the store operates on
    fn root(&self) -> &Path;

    /// Entries directly inside the root, sorted by name
    fn list_entries(&self) -> Result<Vec<NoteEntry>>;

    fn note_exists(&self, file_name: &str) -> bool;

    fn read_note(&self, file_name: &str) -> Result<String>;

    fn write_note(&self, file_name: &str, content: &str) -> Result<()>;

    /// Rename a note, refusing to overwrite an existing file
    fn rename_note(&self, from: &str, to: &str) -> Result<()>;
}

/// File system implementation of NoteStore
#[derive(Debug, Clone)]
pub struct FileSystemNoteStore {
    root: PathBuf,
}

impl FileSystemNoteStore {
    /// Open a store over an existing directory
    pub fn open(root: PathBuf) -> Result<Self> {
        if !root.is_dir() {
            return Err(ConvertError::NotADirectory(root));
        }
        Ok(FileSystemNoteStore { root })
    }
}

impl NoteStore for FileSystemNoteStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_entries(&self) -> Result<Vec<NoteEntry>> {
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry?;
            let Some(file_name) = entry.file_name().to_str() else {
                log::warn!(
                    "Skipping entry with non UTF-8 name: {}",
                    entry.path().display()
                );
                continue;
            };
            // Follow symlinks so a link to a directory is treated as one
            entries.push(NoteEntry::new(file_name.to_string(), entry.path().is_dir()));
        }

        Ok(entries)
    }

    fn note_exists(&self, file_name: &str) -> bool {
        self.root.join(file_name).exists()
    }

    fn read_note(&self, file_name: &str) -> Result<String> {
        let path = self.root.join(file_name);
        fs::read_to_string(&path).map_err(|source| ConvertError::Read { path, source })
    }

    /// Write to a temp file next to the note, then rename it into place.
    fn write_note(&self, file_name: &str, content: &str) -> Result<()> {
        let path = self.root.join(file_name);
        let tmp_path = path.with_file_name(format!(
            "{}.roam2org-tmp-{}",
            file_name,
            std::process::id()
        ));

        let result = fs::write(&tmp_path, content).and_then(|()| replace_file(&tmp_path, &path));
        if result.is_err() && tmp_path.exists() {
            if let Err(e) = fs::remove_file(&tmp_path) {
                log::warn!("Failed to remove {}: {}", tmp_path.display(), e);
            }
        }

        result.map_err(|source| ConvertError::Write { path, source })
    }

    fn rename_note(&self, from: &str, to: &str) -> Result<()> {
        let from_path = self.root.join(from);
        let to_path = self.root.join(to);

        if to_path.exists() {
            return Err(ConvertError::DestinationExists(to_path));
        }

        fs::rename(&from_path, &to_path).map_err(|source| ConvertError::Rename {
            from: from_path,
            to: to_path,
            source,
        })
    }
}

/// Move `tmp_path` over `path`.
fn replace_file(tmp_path: &Path, path: &Path) -> std::io::Result<()> {
    if path.exists() {
        // Windows rename does not replace an existing file
        fs::remove_file(path)?;
    }
    fs::rename(tmp_path, path)
}
