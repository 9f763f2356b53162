//! Text normalization ahead of chunking.
//!
//! Every step here is total: malformed input degrades to being passed
//! through untouched, never to an error. The whole pass is idempotent so a
//! caller may safely run it over already-normalized text.

mod links;
mod tables;


pub use tables::format_tables;

use once_cell::sync::Lazy;
use regex::Regex;

// Three or more newlines (blank lines may carry stray spaces or tabs)
// collapse to one paragraph separator.
static BLANK_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("valid pattern"));

/// Normalize raw text before chunking: collapse blank-line runs, rewrite
/// recognizable platform URLs into labeled markdown links, close unclosed
/// markdown links, and rewrite pipe tables into bulleted key/value blocks.
pub fn preprocess(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let collapsed = BLANK_RUNS.replace_all(text, "\n\n");
    let linked = links::rewrite_platform_links(&collapsed);
    let repaired = links::repair_markdown_links(&linked);
    tables::format_tables(&repaired)
}
