//! Test-only fixtures shared by unit and integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Inputs mixing one-, two-, three- and four-byte UTF-8 characters.
pub const MULTIBYTE_SAMPLES: &[&str] = &[
    "",
    "a",
    "Hello, World!",
    "héllo wörld",
    "日本語のテキスト",
    "crab 🦀 and 🦐",
    "mixé 中文 🎉 end",
];

/// Write `contents` to `textkit.toml` inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("textkit.toml");
    fs::write(&path, contents).expect("write config");
    (temp, path)
}
