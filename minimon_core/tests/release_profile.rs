//! The sysinfo provider relies on `catch_unwind`; an aborting release build
//! would turn a refresh panic into a crash.

use std::fs;
use std::path::Path;

#[test]
fn release_profile_keeps_unwinding() {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("../Cargo.toml");
    let text = fs::read_to_string(manifest).expect("workspace manifest");
    let release = text
        .split("[profile.release]")
        .nth(1)
        .expect("release profile");
    let section = release.split("\n[").next().unwrap_or(release);
    assert!(!section.contains("panic = \"abort\""));
}
