use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TERM: Regex = Regex::new(r"[a-z0-9]{2,}").expect("valid regex");
}

/// Tokenize text into index terms: lowercase, split on anything that is not
/// an ASCII letter or digit, drop tokens shorter than two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TERM.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
