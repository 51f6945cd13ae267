use guideline_core::chunker::chunk;

#[test]
fn short_text_yields_one_cleaned_passage() {
    let got = chunk("  glycemic   control\twith metformin \n", 1400, 250);
    assert_eq!(got, vec!["glycemic control with metformin"]);
}

#[test]
fn empty_text_yields_nothing() {
    assert!(chunk("", 1400, 250).is_empty());
    assert!(chunk(" \n\t ", 1400, 250).is_empty());
}

#[test]
fn windows_overlap_and_cover_the_whole_text() {
    let text: String = (0..50).map(|i| format!("word{i} ")).collect();
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let max_chars = 40;
    let overlap = 10;

    let parts = chunk(&text, max_chars, overlap);
    assert!(parts.len() > 1);

    // every window except the last is exactly max_chars
    for p in &parts[..parts.len() - 1] {
        assert_eq!(p.chars().count(), max_chars);
    }

    // each window starts with the last `overlap` chars of its predecessor
    for pair in parts.windows(2) {
        let tail: String = pair[0].chars().skip(max_chars - overlap).collect();
        assert!(pair[1].starts_with(&tail));
    }

    // dropping the duplicated prefixes reconstructs the cleaned text
    let mut rebuilt: String = parts[0].clone();
    for p in &parts[1..] {
        rebuilt.extend(p.chars().skip(overlap));
    }
    assert_eq!(rebuilt, cleaned);
}

#[test]
fn degenerate_overlap_still_terminates() {
    // overlap >= max_chars must not stall; the chunker forces progress
    let text = "abcdefghij".repeat(5);
    let parts = chunk(&text, 10, 10);
    assert!(!parts.is_empty());
    assert!(parts.iter().all(|p| !p.is_empty()));
    assert!(parts.last().unwrap().ends_with('j'));
}
