use super::repair;
use crate::budget::Budget;

fn run(chunks: &[&str], max: usize) -> Vec<String> {
    let mut owned: Vec<String> = chunks.iter().map(|c| c.to_string()).collect();
    repair(&mut owned, Budget::new(max));
    owned
}

#[test]
fn test_sentence_tail_moves_partial_sentence_forward() {
    let repaired = run(&["First sentence. Second trails", "off here. More."], 108);
    assert_eq!(repaired, vec!["First sentence.", "Second trails off here. More."]);
}

#[test]
fn test_clean_sentence_boundary_untouched() {
    let chunks = ["Complete sentence.", "Next chunk."];
    assert_eq!(run(&chunks, 108), chunks.to_vec());
}

#[test]
fn test_sentence_tail_skipped_when_next_would_overflow() {
    let next = "x".repeat(12);
    let repaired = run(&["Sentence one. Trailing bit", &next], 20);
    assert_eq!(repaired[0], "Sentence one. Trailing bit");
    assert_eq!(repaired[1], next);
}

#[test]
fn test_url_tail_reunites_split_url() {
    let repaired = run(&["read https://exam", "ple.com/page now"], 108);
    assert_eq!(repaired, vec!["read", "https://example.com/page now"]);
}

#[test]
fn test_complete_url_at_boundary_untouched() {
    let chunks = ["see https://a.example/page", "Next sentence starts here."];
    assert_eq!(run(&chunks, 108), chunks.to_vec());
}

#[test]
fn test_domain_tail_reunites_split_domain() {
    let repaired = run(&["go to example.", "com/page to see"], 108);
    assert_eq!(repaired, vec!["go to", "example.com/page to see"]);
}

#[test]
fn test_domain_tail_completes_started_tld() {
    let repaired = run(&["see example.co", "m/page for more"], 108);
    assert_eq!(repaired, vec!["see", "example.com/page for more"]);
}

#[test]
fn test_abbreviation_before_lowercase_word_untouched() {
    // the dot after "e.g." is punctuation, not a split domain
    let chunks = ["pick some fruit, e.g.", "apples and oranges here."];
    assert_eq!(run(&chunks, 108), chunks.to_vec());
}

#[test]
fn test_sentence_final_word_not_glued_to_lowercase_continuation() {
    let chunks = ["the sale ends now.", "see the details inside."];
    assert_eq!(run(&chunks, 108), chunks.to_vec());
}

#[test]
fn test_domain_tail_ignores_sentence_final_period() {
    // next chunk starting a new sentence must not be glued to the period
    let chunks = ["That is the idea.", "Another thought follows."];
    assert_eq!(run(&chunks, 108), chunks.to_vec());
}

#[test]
fn test_list_marker_moves_to_its_item() {
    let repaired = run(&["Items:\n1. first\n2.", "second item"], 108);
    assert_eq!(repaired, vec!["Items:\n1. first", "2. second item"]);
}

#[test]
fn test_sentence_tail_never_strands_a_list_marker() {
    // the only sentence boundary sits right after "1.", and splitting
    // there would separate the marker from its item
    let chunks = ["1. short item", "2. next item"];
    assert_eq!(run(&chunks, 108), chunks.to_vec());
}

#[test]
fn test_plain_number_sentence_end_is_not_a_list_marker() {
    let chunks = ["The year was 1945.", "Then it ended."];
    assert_eq!(run(&chunks, 108), chunks.to_vec());
}

#[test]
fn test_markdown_link_tail_reunited() {
    let repaired = run(&["see [broken](https://exa", "mple.com/x) done"], 108);
    assert_eq!(repaired, vec!["see", "[broken](https://example.com/x) done"]);
}

#[test]
fn test_trailing_citation_not_treated_as_broken_link() {
    let chunks = ["cite [12]", "(see below) more"];
    assert_eq!(run(&chunks, 108), chunks.to_vec());
}

#[test]
fn test_single_chunk_untouched() {
    let chunks = ["only one chunk, ends mid"];
    assert_eq!(run(&chunks, 108), chunks.to_vec());
}

#[test]
fn test_repaired_chunks_stay_within_budget() {
    let budget = Budget::new(108);
    let mut chunks: Vec<String> = vec![
        "Alpha beta. Gamma delta trails".to_string(),
        "onward and ends. Tail again trails".to_string(),
        "final words here.".to_string(),
    ];
    repair(&mut chunks, budget);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= budget.effective());
        assert!(!chunk.is_empty());
    }
}
