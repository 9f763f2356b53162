//! Post-hoc boundary repair over the finished chunk sequence.
//!
//! Each adjacent pair is examined once, left to right. The rules are
//! mutually exclusive per pair (first match wins) and each moves a minimal
//! trailing fragment to the head of the next chunk, but only when the grown
//! chunk still fits the effective budget and the shrunk chunk stays
//! non-empty. The pass runs once, not to a fixed point; pathological inputs
//! that would need repeated passes are left as-is, matching the source
//! behavior.

mod rules;

#[cfg(test)]
mod tests;

use tracing::trace;

use crate::budget::Budget;

/// Repair chunk boundaries that land mid-sentence, mid-URL, mid-domain,
/// after a bare list marker, or inside a markdown link.
pub fn repair(chunks: &mut [String], budget: Budget) {
    if chunks.len() < 2 {
        return;
    }
    for i in 0..chunks.len() - 1 {
        let (left, right) = chunks.split_at_mut(i + 1);
        if let Some(rule) = rules::apply_first(&mut left[i], &mut right[0], budget) {
            trace!(boundary = i, rule, "moved trailing fragment forward");
        }
    }
}
