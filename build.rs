use std::env;
use std::process::Command;

/// Stamps `GICM_VERSION`. Release builds use the package version as is;
/// debug builds append the short commit hash and a `.dirty` marker.
fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let release = env::var("PROFILE").is_ok_and(|p| p == "release");

    let stamped = if release {
        version
    } else {
        let hash = git(&["rev-parse", "--short=8", "HEAD"]).unwrap_or_else(|| "unknown".into());
        let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
            .is_some_and(|out| !out.is_empty());
        format!("{}-dev+{}{}", version, hash, if dirty { ".dirty" } else { "" })
    };

    println!("cargo:rustc-env=GICM_VERSION={}", stamped);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-changed=catalog/");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}
