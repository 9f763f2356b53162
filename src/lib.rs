//! Boundary-aware message chunking for length-limited delivery channels.
//!
//! Splits arbitrarily long text into fragments that each fit a channel's
//! maximum message length, keeping sentences, words, URLs, markdown links,
//! numbered lists, and tables intact across fragment boundaries. The
//! pipeline runs strictly forward: preprocess, resolve references, pack
//! paragraphs (decomposing oversized ones), repair boundaries, number the
//! sequence.
//!
//! Every entry point is total: no input, however malformed, produces an
//! error. The computation is pure and synchronous, so independent callers
//! can chunk concurrently without any coordination.

mod budget;
mod finalize;
mod preprocess;
mod references;
mod repair;
mod scan;
mod splitter;


pub use budget::{Budget, DEFAULT_MAX_LENGTH, PREFIX_RESERVE};
pub use preprocess::{format_tables, preprocess};
pub use references::resolve_references;

use tracing::debug;

/// Split `text` into delivery-ready fragments of at most `max_length`
/// characters each, ordinal prefix included.
///
/// Empty input yields a single empty fragment rather than an empty
/// sequence, so callers never special-case it. Fragments carry a `[i/N] `
/// prefix whenever more than one is produced; a lone fragment is returned
/// verbatim.
pub fn chunk(text: &str, max_length: usize) -> Vec<String> {
    let budget = Budget::new(max_length);
    if text.is_empty() {
        return vec![String::new()];
    }
    let prepared = preprocess(text);
    let resolved = resolve_references(&prepared);
    let paragraphs: Vec<&str> = resolved
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    debug!(paragraphs = paragraphs.len(), max_length, "packing paragraphs");
    let mut chunks = splitter::pack(&paragraphs, budget);
    repair::repair(&mut chunks, budget);
    debug!(chunks = chunks.len(), "chunking complete");
    finalize::finalize(chunks, budget)
}
