//! Manifest error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file does not exist or cannot be read.
    #[error("failed to read manifest {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid UTF-8.
    #[error("manifest {} is not valid UTF-8", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The manifest is not valid TOML.
    #[error("failed to parse manifest {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An expected key is absent.
    #[error("missing field '{field}' in {}", path.display())]
    MissingField { path: PathBuf, field: String },

    /// A key is present but holds a value of the wrong shape.
    #[error("field '{field}' in {} must be a {expected}", path.display())]
    InvalidField {
        path: PathBuf,
        field: String,
        expected: &'static str,
    },
}
