use once_cell::sync::Lazy;
use regex::Regex;

// Bare URLs for a small fixed set of platforms get a descriptive label.
// Anything else is left alone for the splitter to protect mechanically.
static PLATFORM_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"https?://(?:www\.)?(?:vm\.tiktok\.com|tiktok\.com|youtube\.com|youtu\.be|instagram\.com|twitter\.com|x\.com)(?:/[^\s)\]]*)?",
    )
    .expect("valid pattern")
});

// A markdown link whose target never closes: `[text](url` followed by
// whitespace or end of text instead of `)`.
static OPEN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]\n]+\]\([^\s)]+").expect("valid pattern"));

fn platform_label(url: &str) -> &'static str {
    if url.contains("tiktok.") {
        "TikTok"
    } else if url.contains("youtu") {
        "YouTube"
    } else if url.contains("instagram.") {
        "Instagram"
    } else {
        "Twitter/X"
    }
}

/// Wrap recognizable platform URLs in `[Label](url)` markdown. URLs that
/// are already a link target (or sit inside brackets) are skipped, which
/// also makes the rewrite idempotent.
pub(super) fn rewrite_platform_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for m in PLATFORM_URL.find_iter(text) {
        let before = &text[..m.start()];
        if before.ends_with("](") || before.ends_with('[') {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.push('[');
        out.push_str(platform_label(m.as_str()));
        out.push_str("](");
        out.push_str(m.as_str());
        out.push(')');
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Insert the missing `)` of an unclosed markdown link at the next
/// whitespace or end-of-text boundary.
pub(super) fn repair_markdown_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut last = 0;
    for m in OPEN_LINK.find_iter(text) {
        if text[m.end()..].starts_with(')') {
            continue;
        }
        out.push_str(&text[last..m.end()]);
        out.push(')');
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
