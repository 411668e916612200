use std::path::PathBuf;

use thiserror::Error;

/// Underlying reader/writer failure, kept for the error chain.
type Source = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("cannot open workbook `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: Source,
    },

    #[error("workbook has no sheet named `{name}`")]
    SheetNotFound { name: String },

    #[error("cell {cell} must hold a number, found {found}")]
    InvalidCellValue { cell: String, found: String },

    #[error("cannot save workbook `{path}`: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: Source,
    },
}
