//! Shared text scanning helpers.
//!
//! Sentence and token boundaries are found by explicit indexed scanning
//! rather than lookaround patterns, so the semantics are the same on every
//! input and never depend on a particular regex engine's feature set.

/// Length of `text` in Unicode scalar values.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split `text` after at most `n` characters, always on a char boundary.
pub fn split_at_chars(text: &str, n: usize) -> (&str, &str) {
    match text.char_indices().nth(n) {
        Some((idx, _)) => text.split_at(idx),
        None => (text, ""),
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{2019}' | '\u{201d}')
}

/// Split text into sentences on a conservative heuristic: a run of `.`,
/// `!`, `?` or `…`, optionally followed by closing quotes/brackets, counts
/// as a boundary only when whitespace (or end of text) comes next. Decimal
/// points and mid-token dots therefore never split.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        while let Some(&(j, c2)) = chars.peek() {
            if is_terminal(c2) || is_closer(c2) {
                end = j + c2.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        match chars.peek() {
            Some(&(_, c2)) if c2.is_whitespace() => {
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                while let Some(&(_, c3)) = chars.peek() {
                    if c3.is_whitespace() {
                        chars.next();
                    } else {
                        break;
                    }
                }
                start = chars.peek().map(|&(j, _)| j).unwrap_or(text.len());
            }
            None => {
                let sentence = text[start..].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = text.len();
            }
            _ => {}
        }
    }
    if start < text.len() {
        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }
    }
    sentences
}

/// Whether trimmed `text` ends on a sentence boundary (terminal punctuation
/// possibly wrapped in closing quotes/brackets).
pub fn ends_on_sentence_boundary(text: &str) -> bool {
    let mut rev = text.trim_end().chars().rev().peekable();
    while let Some(&c) = rev.peek() {
        if is_closer(c) {
            rev.next();
        } else {
            break;
        }
    }
    rev.peek().map(|&c| is_terminal(c)).unwrap_or(false)
}

/// Byte offset just past the last complete in-text sentence boundary, or
/// `None` when the text holds at most one unterminated sentence. A boundary
/// at the very end of the text does not count; callers use this to find
/// where a trailing partial sentence begins.
pub fn last_sentence_boundary(text: &str) -> Option<usize> {
    let mut last = None;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        while let Some(&(j, c2)) = chars.peek() {
            if is_terminal(c2) || is_closer(c2) {
                end = j + c2.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        if matches!(chars.peek(), Some(&(_, c2)) if c2.is_whitespace()) {
            last = Some(end);
        }
    }
    last
}

/// One unit the splitter tries not to break: a word, a URL, or a markdown
/// link. Only units longer than the whole effective budget are ever sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom<'a> {
    Word(&'a str),
    Url(&'a str),
    Link(&'a str),
}

impl<'a> Atom<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Atom::Word(s) | Atom::Url(s) | Atom::Link(s) => s,
        }
    }
}

/// Scan text into atomic units. Markdown links may contain spaces in the
/// label but not in the target; URLs run from the scheme to the next
/// whitespace; everything else splits on whitespace.
pub fn atomic_units(text: &str) -> Vec<Atom<'_>> {
    let mut atoms = Vec::new();
    let mut i = 0;
    while i < text.len() {
        let rest = &text[i..];
        let c = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };
        if c.is_whitespace() {
            i += c.len_utf8();
            continue;
        }
        if c == '[' {
            if let Some(len) = markdown_link_len(rest) {
                atoms.push(Atom::Link(&rest[..len]));
                i += len;
                continue;
            }
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = &rest[..end];
        if token.starts_with("http://") || token.starts_with("https://") {
            atoms.push(Atom::Url(token));
        } else {
            atoms.push(Atom::Word(token));
        }
        i += end;
    }
    atoms
}

/// Byte length of a complete `[label](target)` link at the start of `s`,
/// or `None` when the shape does not close. Targets with whitespace are
/// rejected so prose in brackets is not swallowed.
fn markdown_link_len(s: &str) -> Option<usize> {
    let close = s.find(']')?;
    let after = &s[close + 1..];
    if !after.starts_with('(') {
        return None;
    }
    let rel = after.find(')')?;
    if after[1..rel].contains(char::is_whitespace) {
        return None;
    }
    Some(close + 1 + rel + 1)
}

#[cfg(test)]
mod scan_tests {
    use super::*;

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("One. Two! Three?");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?"]);
    }

    #[test]
    fn test_split_sentences_requires_following_whitespace() {
        // Decimal points and dotted tokens are not boundaries
        let sentences = split_sentences("Pi is 3.14 exactly. Version 2.0 shipped");
        assert_eq!(sentences, vec!["Pi is 3.14 exactly.", "Version 2.0 shipped"]);
    }

    #[test]
    fn test_split_sentences_ellipsis_and_closers() {
        let sentences = split_sentences("Wait... what? He said \"Go.\" Then left.");
        assert_eq!(sentences, vec!["Wait...", "what?", "He said \"Go.\"", "Then left."]);
    }

    #[test]
    fn test_ends_on_sentence_boundary() {
        assert!(ends_on_sentence_boundary("Done."));
        assert!(ends_on_sentence_boundary("He said \"Go.\""));
        assert!(ends_on_sentence_boundary("Really?!  "));
        assert!(!ends_on_sentence_boundary("Trailing words"));
        assert!(!ends_on_sentence_boundary(""));
    }

    #[test]
    fn test_last_sentence_boundary_finds_tail_start() {
        let text = "First sentence. Second trails off";
        let boundary = last_sentence_boundary(text).unwrap();
        assert_eq!(&text[..boundary], "First sentence.");
        assert_eq!(text[boundary..].trim_start(), "Second trails off");
    }

    #[test]
    fn test_last_sentence_boundary_none_without_boundary() {
        assert_eq!(last_sentence_boundary("no punctuation here"), None);
        // terminal at the very end is not an in-text boundary
        assert_eq!(last_sentence_boundary("Only one sentence."), None);
    }

    #[test]
    fn test_atomic_units_mixed() {
        let atoms = atomic_units("visit [My Site](https://x.example/a) or https://y.example now");
        assert_eq!(
            atoms,
            vec![
                Atom::Word("visit"),
                Atom::Link("[My Site](https://x.example/a)"),
                Atom::Word("or"),
                Atom::Url("https://y.example"),
                Atom::Word("now"),
            ]
        );
    }

    #[test]
    fn test_atomic_units_bracket_without_link_shape_is_a_word() {
        let atoms = atomic_units("[not a link] here");
        assert_eq!(
            atoms,
            vec![Atom::Word("[not"), Atom::Word("a"), Atom::Word("link]"), Atom::Word("here")]
        );
    }

    #[test]
    fn test_split_at_chars_multibyte() {
        let (head, tail) = split_at_chars("héllo", 2);
        assert_eq!(head, "hé");
        assert_eq!(tail, "llo");
        let (head, tail) = split_at_chars("ab", 10);
        assert_eq!(head, "ab");
        assert_eq!(tail, "");
    }
}
