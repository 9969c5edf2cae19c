//! Domain layer - Note text rewriting

pub mod bullets;
pub mod dates;
pub mod document;
pub mod links;
pub mod naming;
pub mod pipeline;
pub mod styling;
pub mod tags;
pub mod tasks;
pub mod title;

pub use document::Document;
pub use pipeline::{convert_document, convert_text, Conversion};
