//! Numbered citation markers resolved against URLs found beside them.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

// The three marker syntaxes that associate a number with a URL:
// `(1) https://…`, `[1][https://…]` (optional space), `[1] https://…`.
static PAREN_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((\d{1,3})\)\s+(https?://[^\s)\]]+)").expect("valid pattern"));
static BRACKET_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d{1,3})\]\s*\[(https?://[^\s\]]+)\]").expect("valid pattern"));
static BRACKET_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d{1,3})\]\s*(https?://[^\s)\]]+)").expect("valid pattern"));

/// Rewrite numbered citation markers into `[(n)](url)` markdown links.
///
/// Each marker is associated with the first URL found beside it; every
/// occurrence of a known marker is then rewritten, including bare ones with
/// no adjacent URL. Markers are processed in ascending numeric order so
/// overlapping matches resolve deterministically. Markers that never appear
/// next to a URL are left untouched. Never fails.
pub fn resolve_references(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let markers = collect_markers(text);
    if markers.is_empty() {
        return text.to_string();
    }
    let mut out = text.to_string();
    for (marker, url) in &markers {
        out = rewrite_marker(&out, *marker, url);
    }
    out
}

fn collect_markers(text: &str) -> BTreeMap<u32, String> {
    let mut markers = BTreeMap::new();
    for re in [&*PAREN_MARKER, &*BRACKET_PAIR, &*BRACKET_BARE] {
        for cap in re.captures_iter(text) {
            if let Ok(marker) = cap[1].parse::<u32>() {
                markers.entry(marker).or_insert_with(|| cap[2].to_string());
            }
        }
    }
    markers
}

fn rewrite_marker(text: &str, marker: u32, url: &str) -> String {
    let replacement = format!("[({marker})]({url})");
    let escaped_url = regex::escape(url);
    // defining occurrences first: marker plus its adjacent URL collapse
    // into one link
    let defining = [
        format!(r"\({marker}\)\s+{escaped_url}"),
        format!(r"\[{marker}\]\s*\[{escaped_url}\]"),
        format!(r"\[{marker}\]\s*{escaped_url}"),
    ];
    let mut out = text.to_string();
    for pattern in &defining {
        match Regex::new(pattern) {
            Ok(re) => {
                out = re
                    .replace_all(&out, regex::NoExpand(replacement.as_str()))
                    .into_owned();
            }
            // a URL the engine rejects even escaped: leave this form alone
            Err(_) => continue,
        }
    }
    out = rewrite_standalone(&out, &format!("({marker})"), &replacement);
    out = rewrite_standalone(&out, &format!("[{marker}]"), &replacement);
    out
}

/// Replace bare occurrences of `needle`, skipping any that already sit
/// inside a rewritten or pre-existing markdown link.
fn rewrite_standalone(text: &str, needle: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(needle) {
        let end = pos + needle.len();
        let before = &rest[..pos];
        let after = &rest[end..];
        let inside_link =
            before.ends_with('[') || after.starts_with(']') || after.starts_with('(');
        out.push_str(before);
        if inside_link {
            out.push_str(needle);
        } else {
            out.push_str(replacement);
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod reference_tests {
    use super::*;

    #[test]
    fn test_paren_marker_with_url() {
        let resolved = resolve_references("See (1) https://a.example");
        assert!(resolved.contains("[(1)](https://a.example)"), "got {resolved:?}");
    }

    #[test]
    fn test_bracket_pair_marker() {
        let resolved = resolve_references("Proof [2][https://b.example/x]");
        assert_eq!(resolved, "Proof [(2)](https://b.example/x)");
    }

    #[test]
    fn test_bracket_bare_marker() {
        let resolved = resolve_references("Source [3] https://c.example/y here");
        assert_eq!(resolved, "Source [(3)](https://c.example/y) here");
    }

    #[test]
    fn test_repeated_marker_rewritten_everywhere() {
        let resolved = resolve_references("Claim (1) https://a.example and again (1) later");
        assert_eq!(
            resolved,
            "Claim [(1)](https://a.example) and again [(1)](https://a.example) later"
        );
    }

    #[test]
    fn test_first_url_wins_per_marker() {
        let resolved =
            resolve_references("(4) https://first.example then (4) https://second.example");
        assert!(resolved.contains("[(4)](https://first.example)"));
        // the second URL stays in place as the trailing text of the rewrite
        assert!(!resolved.contains("[(4)](https://second.example)"));
    }

    #[test]
    fn test_marker_without_url_untouched() {
        let text = "A bare (7) stays as it is";
        assert_eq!(resolve_references(text), text);
    }

    #[test]
    fn test_markers_processed_in_ascending_order() {
        let resolved =
            resolve_references("[2] https://two.example before [1] https://one.example");
        assert_eq!(
            resolved,
            "[(2)](https://two.example) before [(1)](https://one.example)"
        );
    }

    #[test]
    fn test_existing_link_with_numeric_label_untouched() {
        let resolved = resolve_references("see [1](https://z.example) and (1) https://a.example");
        assert!(resolved.contains("[1](https://z.example)"));
        assert!(resolved.contains("[(1)](https://a.example)"));
    }

    #[test]
    fn test_resolving_twice_is_stable() {
        let once = resolve_references("See (1) https://a.example and (1) again");
        assert_eq!(resolve_references(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(resolve_references(""), "");
    }
}
