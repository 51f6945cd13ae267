use crate::tokenizer::tokenize;
use crate::Index;
use serde::Serialize;

// BM25 parameters: term-frequency saturation and length normalization.
const K1: f64 = 1.2;
const B: f64 = 0.75;
const EXCERPT_MAX_CHARS: usize = 380;

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub page: u32,
    pub excerpt: String,
    pub score: f64,
}

/// Score every chunk in the index against `query` with BM25 and return the
/// top `k` positive-scoring hits, best first. Ties keep index order, so
/// results are reproducible for identical index state. Read-only; any
/// number of searches may run concurrently over one index handle.
pub fn search(index: &Index, query: &str, k: usize) -> Vec<SearchHit> {
    let q_terms = tokenize(query);
    if q_terms.is_empty() {
        return Vec::new();
    }

    let total_len: u64 = index.chunks.iter().map(|c| u64::from(c.len)).sum();
    let avg_len = if index.chunks.is_empty() {
        1.0
    } else {
        total_len as f64 / index.chunks.len() as f64
    };
    let n = f64::from(index.n);

    let mut scored: Vec<(usize, f64)> = Vec::new();
    for (pos, ch) in index.chunks.iter().enumerate() {
        let mut score = 0.0;
        for t in &q_terms {
            let tf = match ch.tf.get(t) {
                Some(&tf) if tf > 0 => f64::from(tf),
                _ => continue,
            };
            let df = f64::from(index.df.get(t).copied().unwrap_or(0));
            let idf = (1.0 + (n - df + 0.5) / (df + 0.5)).ln();
            let denom = tf + K1 * (1.0 - B + B * (f64::from(ch.len) / avg_len));
            score += idf * (tf * (K1 + 1.0)) / denom;
        }
        if score > 0.0 {
            scored.push((pos, score));
        }
    }

    // sort_by is stable: equal scores stay in insertion order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);

    scored
        .into_iter()
        .map(|(pos, score)| {
            let ch = &index.chunks[pos];
            SearchHit {
                id: ch.chunk_id.clone(),
                title: ch.doc_title.clone(),
                page: ch.page,
                excerpt: excerpt(&ch.text),
                score,
            }
        })
        .collect()
}

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_MAX_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
