use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const LINTS: &str = r#"
[workspace.lints.clippy]
foo = "allow"
pedantic = { level = "warn", priority = -1 }

[workspace.lints.rust]
unsafe_code = "forbid"
bar = { level = "allow" }
"#;

pub const NO_ALLOWED_LINTS: &str = r#"
[workspace.lints.clippy]
all = "warn"

[workspace.lints.rust]
unsafe_code = { level = "deny" }
"#;

/// A throwaway workspace with the `lib/{osi,sys,tmp}` layout.
pub struct Workspace {
    dir: TempDir,
    root: PathBuf,
}

impl Workspace {
    pub fn new(lints: &str, versions: [&str; 3]) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = dir.path().to_path_buf();
        Self::populate(dir, root, lints, versions)
    }

    /// Same as [`Workspace::new`], rooted at a subdirectory called `name`.
    pub fn nested(name: &OsStr, lints: &str, versions: [&str; 3]) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = dir.path().join(name);
        fs::create_dir_all(&root).expect("create workspace root");
        Self::populate(dir, root, lints, versions)
    }

    fn populate(dir: TempDir, root: PathBuf, lints: &str, versions: [&str; 3]) -> Self {
        let workspace = Self { dir, root };
        workspace.write(
            "Cargo.toml",
            &format!("[workspace]\nmembers = [\"lib/osi\", \"lib/sys\", \"lib/tmp\"]\n{lints}"),
        );
        for (package, version) in ["osi", "sys", "tmp"].into_iter().zip(versions) {
            workspace.write(
                &format!("lib/{package}/Cargo.toml"),
                &format!("[package]\nname = \"{package}\"\nversion = \"{version}\"\n"),
            );
        }
        workspace
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Directory holding the workspace root.
    pub fn parent(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create manifest dir");
        }
        fs::write(path, contents).expect("write manifest");
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.path().join(relative)).expect("remove manifest");
    }

    /// The binary with `PATH_WS` pointing at this workspace.
    pub fn cmd(&self) -> Command {
        let mut cmd = bare_cmd();
        cmd.env("PATH_WS", self.path());
        cmd
    }
}

/// The binary with a clean logging and `PATH_WS` environment.
pub fn bare_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("cargo-query");
    cmd.env_remove("PATH_WS").env_remove("CARGO_QUERY_LOG");
    cmd
}
