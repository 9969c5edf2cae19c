//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::{Config, ErrorPolicy};
pub use repository::{FileSystemNoteStore, NoteEntry, NoteStore};
