use crate::{Chunk, Index};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::Path;

/// Write the index artifact as a single JSON object.
pub fn save_index(path: &Path, index: &Index) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    let mut f = File::create(path)
        .with_context(|| format!("creating index artifact {}", path.display()))?;
    let json = serde_json::to_string(index)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

/// Read and validate the index artifact.
///
/// Invalid JSON or a missing `chunks` array is fatal. Records written by
/// older indexers are normalized here, once, into the canonical schema:
/// title from `title`, else `docTitle`, else `file`/`source`, else
/// "Guideline"; text from `text`, else `chunk`; id from `chunkId`, else
/// `id`, else a slug derived from the title and position. Everything
/// downstream only ever sees the canonical shape.
pub fn load_index(path: &Path) -> Result<Index> {
    let raw_text = std::fs::read_to_string(path)
        .with_context(|| format!("reading index artifact {}", path.display()))?;
    let raw: RawIndex = serde_json::from_str(&raw_text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let Some(raw_chunks) = raw.chunks else {
        bail!(
            "index missing `chunks` array (expected {{ createdAt, N, documentFrequency, chunks: [...] }})"
        );
    };

    let mut chunks: Vec<Chunk> = Vec::new();
    for (i, rc) in raw_chunks.into_iter().enumerate() {
        match rc.normalize(i) {
            Some(chunk) => chunks.push(chunk),
            None => tracing::warn!(position = i, "dropping chunk record with empty text"),
        }
    }

    let n = chunks.len() as u32;
    if let Some(declared) = raw.n {
        if declared != n {
            tracing::warn!(declared, actual = n, "chunk count mismatch in artifact, using actual");
        }
    }

    Ok(Index {
        created_at: raw.created_at.unwrap_or_default(),
        n,
        df: raw.df.unwrap_or_default(),
        chunks,
    })
}

#[derive(Deserialize)]
struct RawIndex {
    #[serde(rename = "createdAt")]
    created_at: Option<String>,
    #[serde(rename = "N")]
    n: Option<u32>,
    #[serde(rename = "documentFrequency", alias = "df")]
    df: Option<HashMap<String, u32>>,
    chunks: Option<Vec<RawChunk>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChunk {
    doc_id: Option<String>,
    doc_title: Option<String>,
    title: Option<String>,
    file: Option<String>,
    source: Option<String>,
    page: Option<u32>,
    chunk_id: Option<String>,
    id: Option<String>,
    text: Option<String>,
    chunk: Option<String>,
    #[serde(default)]
    tf: HashMap<String, u32>,
    len: Option<u32>,
}

impl RawChunk {
    fn normalize(self, position: usize) -> Option<Chunk> {
        let text = self.text.or(self.chunk).unwrap_or_default();
        if text.trim().is_empty() {
            return None;
        }
        let title = self
            .title
            .or(self.doc_title)
            .or_else(|| self.file.clone())
            .or_else(|| self.source.clone())
            .unwrap_or_else(|| "Guideline".to_string());
        let chunk_id = self
            .chunk_id
            .or(self.id)
            .unwrap_or_else(|| format!("{}-{position}", slug(&title)));
        let len = self.len.unwrap_or_else(|| self.tf.values().sum());
        Some(Chunk {
            doc_id: self.doc_id.unwrap_or_default(),
            doc_title: title,
            file: self.file.or(self.source).unwrap_or_default(),
            page: self.page.unwrap_or(1),
            chunk_id,
            text,
            tf: self.tf,
            len,
        })
    }
}

fn slug(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
