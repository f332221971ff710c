//! I/O helpers for textkit commands.

pub mod config;
