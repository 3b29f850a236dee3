//! Error types for the converter.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failures that end a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input file does not exist; nothing was rendered.
    #[error("Input file {} not found", path.display())]
    InputNotFound { path: PathBuf },

    /// The input file exists but could not be read as UTF-8 text.
    #[error("Failed to read input file {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No font family could be loaded for the renderer.
    #[error("Fonts unavailable")]
    FontsUnavailable(#[source] genpdf::error::Error),

    /// The renderer failed while building the document.
    #[error("Failed to render PDF")]
    Render(#[source] genpdf::error::Error),

    /// The rendered document could not be written.
    #[error("Failed to write output file {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub(crate) fn read_input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            ConvertError::InputNotFound { path }
        } else {
            ConvertError::ReadInput { path, source }
        }
    }
}
