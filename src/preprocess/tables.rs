/// Rewrite pipe-delimited tables into bulleted key/value blocks that read
/// well on channels without table rendering.
///
/// A pipe row opens a table only once a separator row or a second row with
/// the same cell count follows it; a lone pipe row stays plain text. Inside
/// a table the separator is dropped and each data row with a matching cell
/// count becomes `• **h1**: v1, *h2*: v2, …`. A row whose cell count does
/// not match ends the table and becomes the next table candidate. Never
/// fails; non-table text passes through untouched.
pub fn format_tables(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out: Vec<String> = Vec::new();
    let mut headers: Option<Vec<String>> = None;
    // candidate header held back until a follow-up row confirms a table
    let mut pending: Option<(String, Vec<String>)> = None;
    for line in text.lines() {
        match parse_row(line) {
            Some(cells) => {
                if let Some(hs) = headers.as_ref() {
                    if is_separator_row(&cells) {
                        continue;
                    }
                    if cells.len() == hs.len() {
                        out.push(format_row(hs, &cells));
                        continue;
                    }
                    headers = None;
                }
                if let Some((raw, candidate)) = pending.take() {
                    if is_separator_row(&cells) {
                        out.push(format_header(&candidate));
                        headers = Some(candidate);
                        continue;
                    }
                    if cells.len() == candidate.len() {
                        out.push(format_header(&candidate));
                        out.push(format_row(&candidate, &cells));
                        headers = Some(candidate);
                        continue;
                    }
                    out.push(raw);
                }
                if is_separator_row(&cells) {
                    // a separator with no candidate header is just text
                    out.push(line.to_string());
                    continue;
                }
                pending = Some((line.to_string(), cells));
            }
            None => {
                if let Some((raw, _)) = pending.take() {
                    out.push(raw);
                }
                headers = None;
                out.push(line.to_string());
            }
        }
    }
    if let Some((raw, _)) = pending {
        out.push(raw);
    }
    let mut joined = out.join("\n");
    if text.ends_with('\n') {
        joined.push('\n');
    }
    joined
}

/// Cells of a `| a | b |` row, or `None` when the line is not pipe-framed.
/// Single-cell rows are rejected to keep stray `|text|` out of table mode.
fn parse_row(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if trimmed.len() < 2 || !trimmed.starts_with('|') || !trimmed.ends_with('|') {
        return None;
    }
    let inner = &trimmed[1..trimmed.len() - 1];
    let cells: Vec<String> = inner.split('|').map(|c| c.trim().to_string()).collect();
    if cells.len() < 2 {
        return None;
    }
    Some(cells)
}

fn is_separator_row(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
}

fn format_header(headers: &[String]) -> String {
    format!("**{}:**", headers.join(" | "))
}

fn format_row(headers: &[String], cells: &[String]) -> String {
    let mut parts = Vec::with_capacity(cells.len());
    for (i, (header, value)) in headers.iter().zip(cells).enumerate() {
        if i == 0 {
            parts.push(format!("• **{header}**: {value}"));
        } else {
            parts.push(format!("*{header}*: {value}"));
        }
    }
    parts.join(", ")
}
