use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A static corpus entry, supplied by configuration and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub file: String,
}

/// One retrievable passage of a document page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    pub doc_id: String,
    pub doc_title: String,
    pub file: String,
    /// 1-based page number within the source document.
    pub page: u32,
    pub chunk_id: String,
    pub text: String,
    /// Term frequency within this chunk.
    pub tf: HashMap<String, u32>,
    /// Token count; equals the sum of `tf` values.
    pub len: u32,
}

impl Chunk {
    /// Format the unique chunk id from its three parts. Uniqueness holds
    /// because (doc id, page, seq) occurs once per build.
    pub fn id_for(doc_id: &str, page: u32, seq: u32) -> String {
        format!("{doc_id}-p{page}-c{seq}")
    }
}

/// The corpus-level index artifact. Built once by the index builder,
/// loaded read-only, replaced wholesale on rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Total chunk count; equals `chunks.len()`.
    #[serde(rename = "N")]
    pub n: u32,
    /// Document frequency: term -> number of distinct chunks containing it.
    #[serde(rename = "documentFrequency", alias = "df")]
    pub df: HashMap<String, u32>,
    pub chunks: Vec<Chunk>,
}
