pub const DEFAULT_MAX_CHARS: usize = 1400;
pub const DEFAULT_OVERLAP: usize = 250;

/// Split page text into overlapping passage windows.
///
/// Whitespace runs are collapsed to single spaces and the ends trimmed
/// before windowing. Window `i` covers `max_chars` characters; the next
/// window starts `overlap` characters before the previous end, so
/// consecutive windows share exactly `overlap` characters except possibly
/// the final pair. Offsets are measured in characters, not bytes, so a
/// window never splits a UTF-8 scalar.
pub fn chunk(text: &str, max_chars: usize, overlap: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let cleaned: Vec<char> = clean(text).chars().collect();
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;
    loop {
        let end = cleaned.len().min(start + max_chars);
        chunks.push(cleaned[start..end].iter().collect());
        if end == cleaned.len() {
            break;
        }
        // step back by `overlap`, but always advance at least one character
        // so overlap >= max_chars cannot stall the loop
        start = end.saturating_sub(overlap).max(start + 1);
    }
    chunks
}

fn clean(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
