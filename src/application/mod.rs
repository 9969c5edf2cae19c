//! Application layer - Use cases and orchestration

pub mod convert_notes;

pub use convert_notes::{
    ConversionReport, ConvertOptions, ConvertService, FileConversion, FileFailure,
};
