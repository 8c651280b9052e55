//! Error types for placeholder generation

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors which stop a run.  Font problems never show up here; they're handled by falling back
/// to the built-in font.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create the output directory (or one of its parents)
    #[error("Failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output path exists but isn't a directory
    #[error("Output path {} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Failed to encode an image as JPEG
    #[error("Failed to encode {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to write an encoded image to disk
    #[error("Failed to write {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
