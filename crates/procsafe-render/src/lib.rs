//! Rendering utilities for human-facing output (Markdown).

#![forbid(unsafe_code)]

mod markdown;

pub use markdown::{DISCLAIMER, render_analysis_markdown, render_procedure_markdown};
