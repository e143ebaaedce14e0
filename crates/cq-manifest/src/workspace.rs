//! Workspace layout and the aggregated report.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{DisabledLint, Manifest, ManifestError, disabled_lints, package_version};

/// Packages whose versions are reported, in output order.
pub const PACKAGES: [&str; 3] = ["osi", "sys", "tmp"];

const MANIFEST_FILE: &str = "Cargo.toml";

/// Where the manifests live relative to a workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    root: PathBuf,
}

impl WorkspaceLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/Cargo.toml`
    #[must_use]
    pub fn workspace_manifest(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// `<root>/lib/<package>/Cargo.toml`
    #[must_use]
    pub fn package_manifest(&self, package: &str) -> PathBuf {
        self.root.join("lib").join(package).join(MANIFEST_FILE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageVersion {
    pub package: String,
    pub version: String,
}

/// Everything the build system asks for, extracted in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceReport {
    pub versions: Vec<PackageVersion>,
    pub disabled_lints: Vec<DisabledLint>,
}

impl WorkspaceReport {
    /// Read all four manifests under `layout` and extract the report.
    ///
    /// Manifests are read in order: workspace, then each of [`PACKAGES`].
    /// Nothing is returned unless every manifest loads and every field
    /// resolves.
    ///
    /// # Errors
    ///
    /// Returns the first [`ManifestError`] hit while reading, parsing, or
    /// looking up fields.
    pub fn collect(layout: &WorkspaceLayout) -> Result<Self, ManifestError> {
        tracing::debug!(root = %layout.root().display(), "collecting workspace report");

        let workspace = Manifest::load(layout.workspace_manifest())?;
        let mut packages = Vec::with_capacity(PACKAGES.len());
        for package in PACKAGES {
            packages.push((package, Manifest::load(layout.package_manifest(package))?));
        }

        Self::from_manifests(&workspace, &packages)
    }

    /// Build the report from manifests that are already parsed.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::MissingField`] or
    /// [`ManifestError::InvalidField`] for any unresolvable field.
    pub fn from_manifests(
        workspace: &Manifest,
        packages: &[(&str, Manifest)],
    ) -> Result<Self, ManifestError> {
        let versions = packages
            .iter()
            .map(|(package, manifest)| {
                Ok(PackageVersion {
                    package: (*package).to_string(),
                    version: package_version(manifest, workspace)?,
                })
            })
            .collect::<Result<Vec<_>, ManifestError>>()?;

        Ok(Self {
            versions,
            disabled_lints: disabled_lints(workspace)?,
        })
    }

    /// Positional lines: one version per package, then the comma-joined
    /// disabled lints (possibly empty).
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self
            .versions
            .iter()
            .map(|entry| entry.version.clone())
            .collect::<Vec<_>>();
        lines.push(crate::render_disabled(&self.disabled_lints));
        lines
    }
}
