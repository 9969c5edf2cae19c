//! Convert export directory use case
//!
//! Runs the rewrite pipeline over every note in a directory, writes each note
//! back and renames it to its target file name.

use crate::domain::naming::target_file_name;
use crate::domain::{convert_document, Document};
use crate::error::{ConvertError, Result};
use crate::infrastructure::{Config, ErrorPolicy, NoteStore};

/// Options for a conversion run
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub config: Config,
    /// Compute results without writing or renaming anything
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConversion {
    pub source: String,
    pub target: String,
    pub link_names: usize,
}

impl FileConversion {
    pub fn is_renamed(&self) -> bool {
        self.source != self.target
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub file_name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionReport {
    pub converted: Vec<FileConversion>,
    pub skipped: Vec<String>,
    pub failures: Vec<FileFailure>,
    pub dry_run: bool,
}

impl ConversionReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Service for converting a directory of notes
pub struct ConvertService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> ConvertService<S> {
    pub fn new(store: S) -> Self {
        ConvertService { store }
    }

    /// Convert every eligible entry of the store, one file at a time.
    ///
    /// # Errors
    ///
    /// Listing failures always end the run. Per-file failures end it under
    /// `ErrorPolicy::Abort` and are collected in the report under
    /// `ErrorPolicy::Continue`.
    pub fn execute(&self, options: &ConvertOptions) -> Result<ConversionReport> {
        let mut report = ConversionReport {
            dry_run: options.dry_run,
            ..ConversionReport::default()
        };

        for entry in self.store.list_entries()? {
            if entry.is_dir {
                log::debug!("Skipping directory {}", entry.file_name);
                report.skipped.push(entry.file_name);
                continue;
            }
            if options.config.is_skipped(&entry.file_name) {
                log::debug!("Skipping {}", entry.file_name);
                report.skipped.push(entry.file_name);
                continue;
            }

            log::info!("{}", entry.file_name);

            match self.convert_file(&entry.file_name, options.dry_run) {
                Ok(conversion) => report.converted.push(conversion),
                Err(e) => match options.config.on_error {
                    ErrorPolicy::Abort => return Err(e),
                    ErrorPolicy::Continue => {
                        log::warn!("Failed to convert {}: {}", entry.file_name, e);
                        report.failures.push(FileFailure {
                            file_name: entry.file_name,
                            message: e.to_string(),
                        });
                    }
                },
            }
        }

        Ok(report)
    }

    fn convert_file(&self, file_name: &str, dry_run: bool) -> Result<FileConversion> {
        let text = self.store.read_note(file_name)?;
        let mut document = Document::new(self.store.root().join(file_name), text);

        let link_names = convert_document(&mut document);
        log::debug!(
            "{}: {} link name(s)",
            document.source_path().display(),
            link_names.len()
        );

        let conversion = FileConversion {
            source: file_name.to_string(),
            target: target_file_name(file_name),
            link_names: link_names.len(),
        };

        // Leave the source untouched when its target name is already taken
        if conversion.is_renamed() && self.store.note_exists(&conversion.target) {
            return Err(ConvertError::DestinationExists(
                self.store.root().join(&conversion.target),
            ));
        }

        if !dry_run {
            self.store.write_note(file_name, &document.into_text())?;
            if conversion.is_renamed() {
                self.store.rename_note(&conversion.source, &conversion.target)?;
            }
        }

        Ok(conversion)
    }
}
