//! Iteration and string-manipulation idioms as a small, pure library.
//!
//! The crate keeps the same split the CLI relies on:
//!
//! - **[`core`]**: Pure, deterministic text and iteration helpers. No I/O.
//! - **[`io`]**: Config loading and writing for the demo driver.
//!
//! [`demo`] strings the core helpers together into the ordered walkthrough
//! printed by `textkit demo`.

pub mod core;
pub mod demo;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::pattern::find_all_matches;
pub use crate::core::strings::{
    CaseVariants, byte_index_of, case_variants, index_of, replace_all, reverse,
    reverse_graphemes, split_and_join, split_lines, split_words, trim,
};
pub use crate::error::TextError;
