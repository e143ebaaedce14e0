//! `package.version` lookup.

use toml::{Table, Value};

use crate::{Manifest, ManifestError};

const PACKAGE_VERSION: [&str; 2] = ["package", "version"];
const WORKSPACE_VERSION: [&str; 3] = ["workspace", "package", "version"];

/// Return the version string of a package manifest.
///
/// A package written as `version.workspace = true` takes the version from
/// `workspace.package.version` of `workspace`.
///
/// # Errors
///
/// Returns [`ManifestError::MissingField`] when the version (or the inherited
/// workspace version) is absent, and [`ManifestError::InvalidField`] when it
/// is neither a string nor the inherited form.
pub fn package_version(package: &Manifest, workspace: &Manifest) -> Result<String, ManifestError> {
    match package.require(&PACKAGE_VERSION)? {
        Value::String(version) => Ok(version.clone()),
        Value::Table(table) if inherits_workspace(table) => {
            tracing::debug!(
                path = %package.path().display(),
                "package version inherited from workspace"
            );
            workspace
                .require(&WORKSPACE_VERSION)?
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| workspace.invalid(&WORKSPACE_VERSION, "string"))
        }
        _ => Err(package.invalid(&PACKAGE_VERSION, "string or { workspace = true }")),
    }
}

fn inherits_workspace(table: &Table) -> bool {
    table.get("workspace").and_then(Value::as_bool) == Some(true)
}
