//! Deterministic, pure helpers shared by the library and the CLI.
//!
//! Core modules must be free of I/O side effects. They borrow their inputs
//! and return freshly allocated (or borrowed) outputs.

pub mod iterate;
pub mod pattern;
pub mod strings;
