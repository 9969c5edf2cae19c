//! roam2org - Convert a Roam Research markdown export into org-mode notes
//!
//! Every note in the export directory is rewritten in place (links, dates,
//! task keywords, bullets, tags) and renamed to its org-mode file name.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ConvertError;
