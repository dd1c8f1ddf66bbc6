//! Utility modules for Bambot

pub mod truncate;

pub use truncate::{truncate_lines_count, truncate_lines_width};
