//! Greedy paragraph packing with granularity escalation.
//!
//! Paragraphs are packed whole while they fit; an oversized paragraph is
//! decomposed by line, then sentence, then atomic unit (word, URL, markdown
//! link), and only as a last resort sliced at the character level.

mod decompose;
mod packer;


pub use decompose::decompose;
pub use packer::pack;
