use crate::budget::Budget;
use crate::scan::{char_len, ends_on_sentence_boundary, last_sentence_boundary};

type Rule = fn(&str, &str, Budget) -> Option<(String, String)>;

const RULES: [(&str, Rule); 5] = [
    ("sentence-tail", sentence_tail),
    ("url-tail", url_tail),
    ("domain-tail", domain_tail),
    ("list-marker", list_marker),
    ("markdown-link-tail", markdown_link_tail),
];

/// Try each rule in order against the pair; the first that applies rewrites
/// both chunks and its name is returned.
pub(super) fn apply_first(
    current: &mut String,
    next: &mut String,
    budget: Budget,
) -> Option<&'static str> {
    for (name, rule) in RULES {
        if let Some((new_current, new_next)) = rule(current, next, budget) {
            *current = new_current;
            *next = new_next;
            return Some(name);
        }
    }
    None
}

fn fits(text: &str, budget: Budget) -> bool {
    char_len(text) <= budget.effective()
}

fn join_with_space(tail: &str, next: &str) -> String {
    if next.starts_with(char::is_whitespace) {
        format!("{tail}{next}")
    } else {
        format!("{tail} {next}")
    }
}

/// The dangling last token of `text`, or `None` when the chunk ends on
/// whitespace (a clean break).
fn last_token(text: &str) -> Option<&str> {
    if text.ends_with(char::is_whitespace) {
        return None;
    }
    text.split_whitespace().next_back()
}

/// Move everything after the last complete sentence boundary forward when
/// the chunk ends mid-sentence.
fn sentence_tail(current: &str, next: &str, budget: Budget) -> Option<(String, String)> {
    let trimmed = current.trim_end();
    if trimmed.is_empty() || ends_on_sentence_boundary(trimmed) {
        return None;
    }
    let boundary = last_sentence_boundary(trimmed)?;
    let tail = trimmed[boundary..].trim_start();
    let head = trimmed[..boundary].trim_end();
    if tail.is_empty() || head.is_empty() {
        return None;
    }
    // a boundary right after a bare list marker is not a sentence end;
    // splitting there would strand the marker
    let head_line = head.rfind('\n').map(|p| &head[p + 1..]).unwrap_or(head);
    if is_bare_marker(head_line.trim()) {
        return None;
    }
    // a tail ending in a partial URL or broken link needs a no-space join
    // from a later rule instead
    let tail_token = tail.split_whitespace().next_back().unwrap_or("");
    if is_partial_url(tail_token) || (tail_token.contains('[') && !tail_token.contains(')')) {
        return None;
    }
    let new_next = join_with_space(tail, next);
    if !fits(&new_next, budget) {
        return None;
    }
    Some((head.to_string(), new_next))
}

/// Reunite a URL cut at the boundary: the tail token is a visibly
/// incomplete URL and the next chunk continues it without whitespace.
fn url_tail(current: &str, next: &str, budget: Budget) -> Option<(String, String)> {
    let token = last_token(current)?;
    if !is_partial_url(token) {
        return None;
    }
    let continues = next
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '/' || c == '.');
    if !continues {
        return None;
    }
    move_token_joined(current, token, next, budget)
}

/// Move the dangling last token of `current` onto the head of `next` with
/// no separating space (the token continues there).
fn move_token_joined(
    current: &str,
    token: &str,
    next: &str,
    budget: Budget,
) -> Option<(String, String)> {
    let head = current[..current.len() - token.len()].trim_end();
    if head.is_empty() {
        return None;
    }
    let new_next = format!("{token}{next}");
    if !fits(&new_next, budget) {
        return None;
    }
    Some((head.to_string(), new_next))
}

/// An unfinished scheme (`htt`, `https:/`) or a URL whose authority has no
/// dot yet (`https://exam`). A URL with a dotted host could be complete, so
/// it is never treated as partial.
fn is_partial_url(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    if "http://".starts_with(token) || "https://".starts_with(token) {
        return true;
    }
    for scheme in ["http://", "https://"] {
        if let Some(authority) = token.strip_prefix(scheme) {
            return !authority.contains('.');
        }
    }
    false
}

/// Reunite a domain name split at or just after its dot: `…example.` +
/// `com/page`, or `…example.co` + `m/page`.
fn domain_tail(current: &str, next: &str, budget: Budget) -> Option<(String, String)> {
    let token = last_token(current)?;
    let started = partial_tld(token)?;
    // the next chunk must open with the rest of a short TLD
    let run_len = next
        .char_indices()
        .find(|(_, c)| !c.is_ascii_lowercase())
        .map(|(i, _)| i)
        .unwrap_or(next.len());
    if run_len == 0 || started.len() + run_len > 3 {
        return None;
    }
    // a TLD completed by the next chunk must continue as a URL there; an
    // ordinary word after the run means the dot was sentence punctuation
    // (`e.g.` + `apples`), unless the current token already shows TLD
    // letters after its dot
    let after = next[run_len..].chars().next();
    let continues_as_url = matches!(after, None | Some('/') | Some('.'));
    if !continues_as_url && (started.is_empty() || !after.is_some_and(char::is_whitespace)) {
        return None;
    }
    move_token_joined(current, token, next, budget)
}

/// The lowercase TLD fragment already present after the final dot of a
/// domain-like token (`""` for `example.`, `"co"` for `example.co`), or
/// `None` when the token cannot be a split domain. Requires a letter in the
/// body so bare list numbers (`3.`) never match.
fn partial_tld(token: &str) -> Option<&str> {
    let dot = token.rfind('.')?;
    let (body, dotted_tld) = token.split_at(dot);
    let tld = &dotted_tld[1..];
    if tld.len() > 2 || !tld.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }
    if !body.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    if !body.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-') {
        return None;
    }
    Some(tld)
}

/// Move a bare ordinal marker (`3.` alone on the chunk's last line) forward
/// so it is not separated from its item text.
fn list_marker(current: &str, next: &str, budget: Budget) -> Option<(String, String)> {
    let trimmed = current.trim_end();
    let line_start = trimmed.rfind('\n').map(|p| p + 1).unwrap_or(0);
    let line = trimmed[line_start..].trim();
    if !is_bare_marker(line) {
        return None;
    }
    let head = trimmed[..line_start].trim_end();
    if head.is_empty() {
        return None;
    }
    let new_next = join_with_space(line, next);
    if !fits(&new_next, budget) {
        return None;
    }
    Some((head.to_string(), new_next))
}

fn is_bare_marker(line: &str) -> bool {
    let Some(body) = line.strip_suffix('.') else {
        return false;
    };
    !body.is_empty() && body.len() <= 4 && body.chars().all(|c| c.is_ascii_digit())
}

/// Move a broken markdown-link fragment (`[text`, `[text](par`) forward.
/// Bare numeric citations like `[12]` are legitimate trailing text.
fn markdown_link_tail(current: &str, next: &str, budget: Budget) -> Option<(String, String)> {
    let trimmed = current.trim_end();
    let open = trimmed.rfind('[')?;
    let fragment = &trimmed[open..];
    if fragment.contains('\n') || !is_dangling_link(fragment, next) {
        return None;
    }
    let head = trimmed[..open].trim_end();
    if head.is_empty() {
        return None;
    }
    let new_next = format!("{fragment}{next}");
    if !fits(&new_next, budget) {
        return None;
    }
    Some((head.to_string(), new_next))
}

fn is_dangling_link(fragment: &str, next: &str) -> bool {
    match fragment.find(']') {
        // still inside the [text part
        None => true,
        Some(close) => {
            let after = &fragment[close + 1..];
            if after.is_empty() {
                // `[text]` at the very end: dangling only when the next
                // chunk opens the target part and the label is not a
                // citation number
                let label = &fragment[1..close];
                let citation = !label.is_empty() && label.chars().all(|c| c.is_ascii_digit());
                return !citation && next.starts_with('(');
            }
            after.starts_with('(') && !after.contains(')')
        }
    }
}
