use tracing::trace;

use crate::budget::Budget;
use crate::scan::{atomic_units, char_len, split_at_chars, split_sentences};

/// Break one oversized paragraph down only as far as needed: by line, then
/// sentence, then atomic unit, then raw character slicing.
///
/// Returns the completed chunks plus an unfinished remainder for the caller
/// to keep packing into. No character is discarded; every piece of the
/// paragraph lands in exactly one chunk (modulo whitespace normalization at
/// unit seams).
pub fn decompose(paragraph: &str, budget: Budget) -> (Vec<String>, String) {
    let mut chunks = Vec::new();
    let mut buffer = String::new();
    if paragraph.contains('\n') {
        for line in paragraph.lines() {
            push_line(line, budget, &mut chunks, &mut buffer);
        }
    } else {
        push_sentences(paragraph, budget, &mut chunks, &mut buffer);
    }
    (chunks, buffer)
}

/// Treat one line like a miniature paragraph: append it whole when it fits,
/// otherwise escalate to sentence splitting.
fn push_line(line: &str, budget: Budget, chunks: &mut Vec<String>, buffer: &mut String) {
    let line = line.trim_end();
    if line.is_empty() {
        return;
    }
    let line_len = char_len(line);
    if line_len > budget.effective() {
        push_sentences(line, budget, chunks, buffer);
        return;
    }
    let sep = if buffer.is_empty() { 0 } else { 1 };
    if !buffer.is_empty() && char_len(buffer) + sep + line_len > budget.effective() {
        chunks.push(std::mem::take(buffer));
    }
    if !buffer.is_empty() {
        buffer.push('\n');
    }
    buffer.push_str(line);
}

fn push_sentences(text: &str, budget: Budget, chunks: &mut Vec<String>, buffer: &mut String) {
    for sentence in split_sentences(text) {
        let sentence_len = char_len(sentence);
        let sep = if buffer.is_empty() { 0 } else { 1 };
        if char_len(buffer) + sep + sentence_len <= budget.effective() {
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(sentence);
            continue;
        }
        if !buffer.is_empty() {
            chunks.push(std::mem::take(buffer));
        }
        if sentence_len <= budget.effective() {
            buffer.push_str(sentence);
        } else {
            push_atoms(sentence, budget, chunks, buffer);
        }
    }
}

/// Pack a sentence's atomic units. A URL or markdown link that would
/// overflow the running buffer moves whole to a fresh chunk instead of
/// being cut at the boundary; only a unit longer than the entire effective
/// budget is sliced at the character level.
fn push_atoms(sentence: &str, budget: Budget, chunks: &mut Vec<String>, buffer: &mut String) {
    for atom in atomic_units(sentence) {
        let text = atom.text();
        let atom_len = char_len(text);
        let sep = if buffer.is_empty() { 0 } else { 1 };
        if char_len(buffer) + sep + atom_len <= budget.effective() {
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(text);
            continue;
        }
        if !buffer.is_empty() {
            chunks.push(std::mem::take(buffer));
        }
        if atom_len <= budget.effective() {
            buffer.push_str(text);
            continue;
        }
        // last resort: the unit alone exceeds the budget
        trace!(unit = ?atom, len = atom_len, "slicing oversized atomic unit");
        let mut rest = text;
        while char_len(rest) > budget.effective() {
            let (head, tail) = split_at_chars(rest, budget.effective());
            chunks.push(head.to_string());
            rest = tail;
        }
        buffer.push_str(rest);
    }
}
