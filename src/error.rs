use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting the drawing to an image file
#[derive(Debug, Error)]
pub enum ExportError {
    /// The rendered image could not be encoded or written to disk
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}
