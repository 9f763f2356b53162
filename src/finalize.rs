//! Ordinal numbering and the last cosmetic pass over the chunk sequence.

use crate::budget::Budget;
use crate::scan::{char_len, split_at_chars};

/// Number the finished sequence for delivery-order reconstruction.
///
/// A single chunk that already fits the unreserved maximum is returned
/// verbatim; otherwise every chunk gets a 1-based `[i/N] ` prefix. Before
/// numbering, a join that would read as one run-on word when the fragments
/// are concatenated gets a single space inserted.
pub fn finalize(mut chunks: Vec<String>, budget: Budget) -> Vec<String> {
    if chunks.is_empty() {
        return vec![String::new()];
    }
    if chunks.len() == 1 && char_len(&chunks[0]) <= budget.max() {
        return chunks;
    }
    guard_word_fusion(&mut chunks, budget);
    fit_prefix_room(&mut chunks, budget);
    let total = chunks.len();
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, content)| format!("[{}/{}] {}", i + 1, total, content))
        .collect()
}

/// Insert a space at joins where a word was split purely by capacity, so
/// fragments read correctly when displayed end to end. Joins that look like
/// one contiguous token (a hard-sliced word or a bare URL) are intentional
/// splits and stay untouched. Skipped entirely when neither side has room.
fn guard_word_fusion(chunks: &mut [String], budget: Budget) {
    for i in 0..chunks.len().saturating_sub(1) {
        let (left, right) = chunks.split_at_mut(i + 1);
        let current = &mut left[i];
        let next = &mut right[0];
        if !needs_join_space(current, next) {
            continue;
        }
        if char_len(current) < budget.effective() {
            current.push(' ');
        } else if char_len(next) < budget.effective() {
            next.insert(0, ' ');
        }
    }
}

/// Widest prefix in a sequence of `total` chunks, `"[total/total] "`.
fn prefix_width(total: usize) -> usize {
    format!("[{total}/{total}] ").chars().count()
}

/// Sequences longer than 99 chunks need ordinal prefixes wider than the
/// packing reserve, so a near-full chunk could overflow the hard cap once
/// numbered. Re-slice any such chunk; slicing grows the count and can widen
/// the prefix again, so iterate until everything fits. Sequences of 99 or
/// fewer chunks are untouched.
fn fit_prefix_room(chunks: &mut Vec<String>, budget: Budget) {
    loop {
        let room = budget
            .max()
            .saturating_sub(prefix_width(chunks.len()))
            .max(1);
        if chunks.iter().all(|c| char_len(c) <= room) {
            return;
        }
        let mut resliced = Vec::with_capacity(chunks.len());
        for chunk in chunks.drain(..) {
            let mut rest = chunk;
            while char_len(&rest) > room {
                let (head, tail) = split_at_chars(&rest, room);
                let head = head.to_string();
                let tail = tail.to_string();
                resliced.push(head);
                rest = tail;
            }
            resliced.push(rest);
        }
        *chunks = resliced;
    }
}

fn needs_join_space(current: &str, next: &str) -> bool {
    let last = match current.chars().next_back() {
        Some(c) => c,
        None => return false,
    };
    let first = match next.chars().next() {
        Some(c) => c,
        None => return false,
    };
    if !last.is_alphanumeric() || !first.is_alphanumeric() {
        return false;
    }
    // a chunk without any whitespace is one contiguous token, which means
    // the split there was a deliberate hard slice
    if !current.contains(char::is_whitespace) || !next.contains(char::is_whitespace) {
        return false;
    }
    current
        .split_whitespace()
        .next_back()
        .map_or(false, |token| !token.contains("://"))
}
