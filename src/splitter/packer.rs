use crate::budget::Budget;
use crate::scan::char_len;
use crate::splitter::decompose;

/// Cost of joining two paragraphs with a blank line.
const PARAGRAPH_SEP: usize = 2;

/// Greedily pack paragraphs into chunks bounded by the effective budget.
///
/// Paragraphs are taken in order, joined by blank lines while they fit; the
/// running buffer flushes into a chunk when the next paragraph would
/// overflow it. A paragraph too large for any single chunk is handed to the
/// decomposer, which pushes completed chunks and returns an unfinished
/// remainder that packing continues from.
pub fn pack(paragraphs: &[&str], budget: Budget) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    for paragraph in paragraphs {
        let paragraph_len = char_len(paragraph);
        if !current.is_empty()
            && char_len(&current) + PARAGRAPH_SEP + paragraph_len > budget.effective()
        {
            chunks.push(std::mem::take(&mut current));
        }
        if paragraph_len <= budget.effective() {
            if !current.is_empty() {
                current.push_str("\n\n");
            }
            current.push_str(paragraph);
        } else {
            let (complete, remainder) = decompose(paragraph, budget);
            chunks.extend(complete);
            current = remainder;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
