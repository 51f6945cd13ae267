use guideline_core::tokenizer::tokenize;

#[test]
fn strips_punctuation_and_case_folds() {
    assert_eq!(tokenize("A1C, eGFR!! 72"), vec!["a1c", "egfr", "72"]);
}

#[test]
fn drops_tokens_shorter_than_two_chars() {
    assert_eq!(tokenize("a 5 x2 ok"), vec!["x2", "ok"]);
}

#[test]
fn empty_input_yields_no_terms() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("  \t\n ").is_empty());
}

#[test]
fn non_ascii_acts_as_separator() {
    assert_eq!(tokenize("naïve café"), vec!["na", "ve", "caf"]);
}
