//! Ordered walkthrough of every helper, driven by [`TextkitConfig`] samples.
//!
//! Each section is an independent call into [`crate::core`]; nothing is
//! carried from one section to the next.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::core::{iterate, pattern, strings};
use crate::error::TextError;
use crate::io::config::TextkitConfig;

/// One titled block of demo output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(title: &str, lines: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            lines,
        }
    }
}

/// Full demo output in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub sections: Vec<Section>,
}

impl DemoReport {
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    /// Render as plain text: a title line per section, its lines, then a blank line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (idx, section) in self.sections.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}:", section.title);
            for line in &section.lines {
                let _ = writeln!(out, "{line}");
            }
        }
        out
    }
}

/// Run every demo step in order against `cfg`.
///
/// Fails only if the configured regex does not compile.
#[instrument(level = "debug", skip_all)]
pub fn build_report(cfg: &TextkitConfig) -> Result<DemoReport, TextError> {
    let mut sections = iteration_sections(cfg);
    sections.extend(string_sections(cfg)?);
    debug!(sections = sections.len(), "demo report built");
    Ok(DemoReport { sections })
}

fn iteration_sections(cfg: &TextkitConfig) -> Vec<Section> {
    let samples = &cfg.iteration;

    let slice = iterate::indexed(&samples.values)
        .into_iter()
        .map(|(index, value)| format!("Index: {index}, Value: {value}"))
        .collect();

    let squares = vec![format!("{:?}", iterate::squares(&samples.numbers))];

    // HashMap order is unspecified; sort so the output is stable.
    let inventory: HashMap<String, i64> = samples
        .inventory
        .iter()
        .map(|(key, value)| (key.clone(), *value))
        .collect();
    let mut pairs = iterate::map_pairs(&inventory);
    pairs.sort_unstable();
    let map = pairs
        .into_iter()
        .map(|(key, value)| format!("Key: {key}, Value: {value}"))
        .collect();

    let zip = iterate::zip_shortest(&samples.zip_left, &samples.zip_right)
        .into_iter()
        .map(|(left, right)| format!("Left: {left}, Right: {right}"))
        .collect();

    let counts = iterate::count_while(samples.count_limit)
        .into_iter()
        .map(|count| format!("Count: {count}"))
        .collect();

    let lazy = iterate::lazy_squares(&samples.numbers)
        .map(|square| square.to_string())
        .collect();

    vec![
        Section::new("Iterating over slice", slice),
        Section::new("Squaring numbers", squares),
        Section::new("Iterating over map", map),
        Section::new("Iterating over two slices in parallel", zip),
        Section::new("Iterating with a while-like loop", counts),
        Section::new("Lazily squaring numbers", lazy),
    ]
}

fn string_sections(cfg: &TextkitConfig) -> Result<Vec<Section>, TextError> {
    let samples = &cfg.strings;
    let text = samples.text.as_str();

    let (parts, joined) = strings::split_and_join(
        &samples.sentence,
        &samples.split_delimiter,
        &samples.join_delimiter,
    );
    let cases = strings::case_variants(text);
    let position = strings::index_of(text, &samples.search)
        .map_or_else(|| "not found".to_string(), |idx| idx.to_string());
    let matches = pattern::find_all_matches(&samples.pattern, &samples.pattern_text)?;

    Ok(vec![
        Section::new("Original string", vec![text.to_string()]),
        Section::new("Reversed string", vec![strings::reverse(text)]),
        Section::new(
            "Splitting and joining string",
            vec![format!("Parts: {parts:?}"), format!("Joined: {joined}")],
        ),
        Section::new(
            "Changing case",
            vec![
                format!("Upper: {}", cases.upper),
                format!("Lower: {}", cases.lower),
                format!("Title: {}", cases.title),
                format!("Swapped: {}", cases.swapped),
            ],
        ),
        Section::new(
            "Replacing substring",
            vec![strings::replace_all(
                text,
                &samples.replace_target,
                &samples.replacement,
            )],
        ),
        Section::new(
            "Stripping whitespace",
            vec![format!("'{}'", strings::trim(&samples.padded))],
        ),
        Section::new(
            "Finding substring",
            vec![format!(
                "Position of '{}' in '{}': {}",
                samples.search, text, position
            )],
        ),
        Section::new(
            "Regex find",
            vec![format!("{} -> {:?}", samples.pattern, matches)],
        ),
        Section::new(
            "Iterating over lines in a multi-line string",
            owned(strings::split_lines(&samples.multiline)),
        ),
        Section::new(
            "Iterating over words in a sentence",
            owned(strings::split_words(&samples.words)),
        ),
    ])
}

fn owned(items: Vec<&str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}
