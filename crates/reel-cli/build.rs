//! Build script stamping the binary version with the git commit.

use std::process::Command;

fn main() {
    // The crate lives two levels below the repository root.
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");

    let package = env!("CARGO_PKG_VERSION");
    let version = match git_commit() {
        Some(commit) => format!("{package} ({commit})"),
        None => package.to_string(),
    };

    println!("cargo:rustc-env=REEL_VERSION={version}");
}

/// Short hash of HEAD, suffixed with `-dirty` for uncommitted changes.
fn git_commit() -> Option<String> {
    let commit = git(&["rev-parse", "--short", "HEAD"])?;
    let dirty = git(&["status", "--porcelain", "--untracked-files=no"]).is_some();

    Some(if dirty {
        format!("{commit}-dirty")
    } else {
        commit
    })
}

/// Run git and return its trimmed stdout, or `None` on failure or empty output.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    let stdout = stdout.trim();
    (!stdout.is_empty()).then(|| stdout.to_string())
}
