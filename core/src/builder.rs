use crate::chunker::{chunk, DEFAULT_MAX_CHARS, DEFAULT_OVERLAP};
use crate::tokenizer::tokenize;
use crate::{Chunk, Document, Index};
use anyhow::Result;
use std::collections::HashMap;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Build-time collaborator yielding the extracted text of a document,
/// one string per page, in page order.
pub trait PageSource {
    /// `Ok(None)` means the document's source is missing; the build logs
    /// the skip and continues with the rest of the corpus. An `Err` is a
    /// fatal extraction condition and aborts the whole build.
    fn pages(&self, doc: &Document) -> Result<Option<Vec<String>>>;
}

/// Chunk window sizing for one build.
#[derive(Debug, Clone, Copy)]
pub struct ChunkParams {
    pub max_chars: usize,
    pub overlap: usize,
}

impl Default for ChunkParams {
    fn default() -> Self {
        Self { max_chars: DEFAULT_MAX_CHARS, overlap: DEFAULT_OVERLAP }
    }
}

/// Build the corpus index in one batch pass.
///
/// For every available document: chunk each page, tokenize each passage,
/// accumulate per-chunk term frequencies and corpus-wide document
/// frequencies, and append the chunk. Document frequency counts distinct
/// chunks, so a term is counted once per chunk no matter how often it
/// occurs there.
pub fn build_index(
    documents: &[Document],
    source: &impl PageSource,
    params: ChunkParams,
) -> Result<Index> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut df: HashMap<String, u32> = HashMap::new();

    for doc in documents {
        let pages = match source.pages(doc)? {
            Some(pages) => pages,
            None => {
                tracing::warn!(doc_id = %doc.id, file = %doc.file, "document source missing, skipping");
                continue;
            }
        };
        tracing::info!(doc_id = %doc.id, title = %doc.title, pages = pages.len(), "indexing document");

        for (page_idx, page_text) in pages.iter().enumerate() {
            let page = page_idx as u32 + 1;
            for (seq, passage) in chunk(page_text, params.max_chars, params.overlap)
                .into_iter()
                .enumerate()
            {
                let tokens = tokenize(&passage);
                let mut tf: HashMap<String, u32> = HashMap::new();
                for t in &tokens {
                    *tf.entry(t.clone()).or_insert(0) += 1;
                }
                // tf keys are already the distinct terms of this chunk
                for t in tf.keys() {
                    *df.entry(t.clone()).or_insert(0) += 1;
                }
                chunks.push(Chunk {
                    doc_id: doc.id.clone(),
                    doc_title: doc.title.clone(),
                    file: doc.file.clone(),
                    page,
                    chunk_id: Chunk::id_for(&doc.id, page, seq as u32),
                    text: passage,
                    tf,
                    len: tokens.len() as u32,
                });
            }
        }
    }

    let n = chunks.len() as u32;
    tracing::info!(chunks = n, terms = df.len(), "index build complete");
    Ok(Index {
        created_at: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "".into()),
        n,
        df,
        chunks,
    })
}
