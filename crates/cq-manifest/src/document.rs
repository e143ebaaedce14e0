//! Parsed Cargo manifests and key-path lookups into them.

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::ManifestError;

/// A parsed `Cargo.toml`, kept together with the path it was read from so
/// lookup failures can name the file.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    table: Table,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Read`] when the file cannot be read,
    /// [`ManifestError::Encoding`] when it is not UTF-8, and
    /// [`ManifestError::Parse`] when it is not valid TOML.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) => return Err(ManifestError::Read { path, source }),
        };
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read manifest");

        let raw = match std::str::from_utf8(&bytes) {
            Ok(raw) => raw,
            Err(source) => return Err(ManifestError::Encoding { path, source }),
        };
        Self::parse(path, raw)
    }

    /// Parse manifest text that was already read from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] when `raw` is not valid TOML.
    pub fn parse(path: impl Into<PathBuf>, raw: &str) -> Result<Self, ManifestError> {
        let path = path.into();
        match toml::from_str::<Table>(raw) {
            Ok(table) => Ok(Self { path, table }),
            Err(source) => Err(ManifestError::Parse { path, source }),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the value at a key path such as `["package", "version"]`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::MissingField`] naming the first absent key,
    /// or [`ManifestError::InvalidField`] when an intermediate key is not a
    /// table.
    pub fn require(&self, keys: &[&str]) -> Result<&Value, ManifestError> {
        let mut table = &self.table;
        for (depth, key) in keys.iter().enumerate() {
            let walked = &keys[..=depth];
            let value = table.get(*key).ok_or_else(|| self.missing(walked))?;
            if depth + 1 == keys.len() {
                return Ok(value);
            }
            table = value
                .as_table()
                .ok_or_else(|| self.invalid(walked, "table"))?;
        }
        Err(self.missing(keys))
    }

    /// Like [`Manifest::require`], but the value must itself be a table.
    ///
    /// # Errors
    ///
    /// Same as [`Manifest::require`], plus [`ManifestError::InvalidField`]
    /// when the final value is not a table.
    pub fn require_table(&self, keys: &[&str]) -> Result<&Table, ManifestError> {
        self.require(keys)?
            .as_table()
            .ok_or_else(|| self.invalid(keys, "table"))
    }

    pub(crate) fn missing(&self, keys: &[&str]) -> ManifestError {
        ManifestError::MissingField {
            path: self.path.clone(),
            field: keys.join("."),
        }
    }

    pub(crate) fn invalid(&self, keys: &[&str], expected: &'static str) -> ManifestError {
        ManifestError::InvalidField {
            path: self.path.clone(),
            field: keys.join("."),
            expected,
        }
    }
}
