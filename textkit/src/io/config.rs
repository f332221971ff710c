//! Demo configuration stored as TOML (default `textkit.toml`).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::pattern;

/// Keeps the `while` section of the demo readable.
const MAX_COUNT_LIMIT: u32 = 1_000;

/// Sample inputs fed to every step of `textkit demo`.
///
/// Intended to be edited by humans. Missing fields default to the classic
/// cheatsheet samples.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TextkitConfig {
    pub iteration: IterationSamples,
    pub strings: StringSamples,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IterationSamples {
    /// Values listed with their index.
    pub values: Vec<i64>,
    /// Numbers squared eagerly and lazily.
    pub numbers: Vec<i64>,
    pub zip_left: Vec<String>,
    pub zip_right: Vec<String>,
    /// Upper bound for the condition-driven loop.
    pub count_limit: u32,
    /// Key/value pairs for map traversal.
    pub inventory: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StringSamples {
    /// Text reversed, case-converted, searched and rewritten.
    pub text: String,
    pub sentence: String,
    pub split_delimiter: String,
    pub join_delimiter: String,
    pub replace_target: String,
    pub replacement: String,
    pub padded: String,
    pub search: String,
    pub pattern: String,
    pub pattern_text: String,
    pub multiline: String,
    pub words: String,
}

impl Default for IterationSamples {
    fn default() -> Self {
        Self {
            values: vec![10, 20, 30, 40, 50],
            numbers: vec![1, 2, 3, 4, 5],
            zip_left: strings(&["one", "two", "three"]),
            zip_right: strings(&["uno", "dos", "tres"]),
            count_limit: 5,
            inventory: [("apple", 3), ("banana", 5), ("cherry", 2)]
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }
}

impl Default for StringSamples {
    fn default() -> Self {
        Self {
            text: "Hello, World!".to_string(),
            sentence: "Rust is awesome".to_string(),
            split_delimiter: " ".to_string(),
            join_delimiter: "-".to_string(),
            replace_target: "World".to_string(),
            replacement: "Rustacean".to_string(),
            padded: "   Lots of space   ".to_string(),
            search: "World".to_string(),
            pattern: r"\b\w{5}\b".to_string(),
            pattern_text: "Hello there, these words: apple, world, and peace.".to_string(),
            multiline: "Line one\nLine two\nLine three".to_string(),
            words: "Iterate through each word in this sentence.".to_string(),
        }
    }
}

impl TextkitConfig {
    /// Reject configs the demo cannot run end to end.
    ///
    /// A pattern that fails to compile is returned as the underlying
    /// `TextError` so callers can map it to its own exit code.
    pub fn validate(&self) -> Result<()> {
        if self.iteration.count_limit > MAX_COUNT_LIMIT {
            return Err(anyhow!(
                "iteration.count_limit must be <= {MAX_COUNT_LIMIT}"
            ));
        }
        pattern::compile(&self.strings.pattern)?;
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `TextkitConfig::default()`.
pub fn load_config(path: &Path) -> Result<TextkitConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = TextkitConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TextkitConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &TextkitConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
