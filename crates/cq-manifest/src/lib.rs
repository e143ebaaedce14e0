//! # cq-manifest
//!
//! Reads the Cargo manifests of a workspace laid out as
//!
//! ```text
//! <root>/Cargo.toml          workspace manifest ([workspace.lints])
//! <root>/lib/osi/Cargo.toml  package manifests ([package] version)
//! <root>/lib/sys/Cargo.toml
//! <root>/lib/tmp/Cargo.toml
//! ```
//!
//! and extracts the values the Meson build needs: the three package versions
//! and the list of lints the workspace sets to `allow`.
//!
//! Manifests are trusted input. Missing fields are reported as
//! [`ManifestError::MissingField`], never defaulted.
//!
//! # Usage
//!
//! ```no_run
//! use cq_manifest::{WorkspaceLayout, WorkspaceReport};
//!
//! let report = WorkspaceReport::collect(&WorkspaceLayout::new(".")).expect("report");
//! for line in report.lines() {
//!     println!("{line}");
//! }
//! ```

mod document;
mod error;
mod lints;
mod version;
mod workspace;

pub use document::Manifest;
pub use error::ManifestError;
pub use lints::{
    DisabledLint, LINT_GROUPS, LintLevel, RENDERED_PREFIX, disabled_lints, render_disabled,
};
pub use version::package_version;
pub use workspace::{PACKAGES, PackageVersion, WorkspaceLayout, WorkspaceReport};
