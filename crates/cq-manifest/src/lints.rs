//! Disabled-lint extraction from `[workspace.lints]`.
//!
//! Both tool groups are scanned in a fixed order (`clippy`, then `rust`) and
//! each group's rules in document order. A rule is disabled when its level is
//! exactly `allow`, whether written as `rule = "allow"` or as
//! `rule = { level = "allow", priority = -1 }`.
//!
//! Every disabled rule is rendered with the `clippy::` prefix, including the
//! ones found in the `rust` group. Consumers match on that exact output.

use std::fmt;

use serde::{Serialize, Serializer};
use toml::Value;

use crate::{Manifest, ManifestError};

/// Tool groups scanned, in output order.
pub const LINT_GROUPS: [&str; 2] = ["clippy", "rust"];

/// Prefix used when rendering every disabled lint.
pub const RENDERED_PREFIX: &str = "clippy";

/// Severity configured for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintLevel {
    Allow,
    Warn,
    Deny,
    Forbid,
    /// Any level cargo does not define, kept verbatim.
    Other(String),
}

impl LintLevel {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Allow => "allow",
            Self::Warn => "warn",
            Self::Deny => "deny",
            Self::Forbid => "forbid",
            Self::Other(level) => level,
        }
    }

    #[must_use]
    pub const fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<&str> for LintLevel {
    fn from(level: &str) -> Self {
        match level {
            "allow" => Self::Allow,
            "warn" => Self::Warn,
            "deny" => Self::Deny,
            "forbid" => Self::Forbid,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A rule whose configured level is `allow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledLint {
    /// Group the rule was declared in.
    pub group: &'static str,
    pub rule: String,
}

impl fmt::Display for DisabledLint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{RENDERED_PREFIX}::{}", self.rule)
    }
}

impl Serialize for DisabledLint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Collect every `allow`-level rule from the workspace manifest.
///
/// # Errors
///
/// Returns [`ManifestError::MissingField`] when `workspace.lints.clippy`,
/// `workspace.lints.rust`, or the `level` of a table-form rule is absent, and
/// [`ManifestError::InvalidField`] when a group is not a table.
pub fn disabled_lints(workspace: &Manifest) -> Result<Vec<DisabledLint>, ManifestError> {
    let mut disabled = Vec::new();

    for group in LINT_GROUPS {
        let rules = workspace.require_table(&["workspace", "lints", group])?;
        for (rule, value) in rules {
            match rule_level(workspace, group, rule, value)? {
                Some(level) if level.is_allow() => {
                    tracing::debug!(group, rule = rule.as_str(), "lint disabled");
                    disabled.push(DisabledLint {
                        group,
                        rule: rule.clone(),
                    });
                }
                level => tracing::trace!(
                    group,
                    rule = rule.as_str(),
                    level = level.as_ref().map_or("<none>", LintLevel::as_str),
                    "lint kept"
                ),
            }
        }
    }

    Ok(disabled)
}

/// Comma-join disabled lints for the line-oriented output.
#[must_use]
pub fn render_disabled(lints: &[DisabledLint]) -> String {
    lints
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Resolve the level of one rule entry. `None` means the entry has a shape
/// that can never be `allow`.
fn rule_level(
    workspace: &Manifest,
    group: &str,
    rule: &str,
    value: &Value,
) -> Result<Option<LintLevel>, ManifestError> {
    match value {
        Value::String(level) => Ok(Some(LintLevel::from(level.as_str()))),
        Value::Table(table) => match table.get("level") {
            Some(Value::String(level)) => Ok(Some(LintLevel::from(level.as_str()))),
            Some(_) => Ok(None),
            None => Err(workspace.missing(&["workspace", "lints", group, rule, "level"])),
        },
        _ => Ok(None),
    }
}
