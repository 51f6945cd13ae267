use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use guideline_core::builder::{build_index, ChunkParams, PageSource};
use guideline_core::persist::save_index;
use guideline_core::retriever::search;
use guideline_core::store::IndexStore;
use guideline_core::Document;
use tracing_subscriber::{fmt, EnvFilter};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "guideline-indexer")]
#[command(about = "Build and query the guideline passage index", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index artifact from a corpus config and extracted page text
    Build {
        /// Corpus config JSON: array of { id, title, file }
        #[arg(long)]
        corpus: String,
        /// Directory of extracted page text, one {doc-id}.json array per document
        #[arg(long)]
        pages: String,
        /// Output index artifact path
        #[arg(long, default_value = "./data/index/index.json")]
        output: String,
        /// Maximum characters per chunk window
        #[arg(long, default_value_t = 1400)]
        max_chars: usize,
        /// Characters of overlap between consecutive windows
        #[arg(long, default_value_t = 250)]
        overlap: usize,
    },
    /// Query a built index artifact from the command line
    Search {
        /// Index artifact path
        #[arg(long, default_value = "./data/index/index.json")]
        index: String,
        /// Query string
        #[arg(long)]
        query: String,
        /// Number of results
        #[arg(short, default_value_t = 4)]
        k: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { corpus, pages, output, max_chars, overlap } => {
            build(&corpus, &pages, &output, max_chars, overlap)
        }
        Commands::Search { index, query, k } => run_search(&index, &query, k),
    }
}

fn build(corpus: &str, pages: &str, output: &str, max_chars: usize, overlap: usize) -> Result<()> {
    ensure!(overlap < max_chars, "overlap must be smaller than max-chars");
    let documents = load_corpus(Path::new(corpus))?;
    let source = ExtractedPages { root: PathBuf::from(pages) };
    let index = build_index(&documents, &source, ChunkParams { max_chars, overlap })?;
    save_index(Path::new(output), &index)?;
    tracing::info!(output, chunks = index.n, terms = index.df.len(), "wrote index artifact");
    Ok(())
}

fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    let f = File::open(path)
        .with_context(|| format!("opening corpus config {}", path.display()))?;
    let docs: Vec<Document> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("{} is not a JSON array of {{ id, title, file }} entries", path.display()))?;
    Ok(docs)
}

fn run_search(index: &str, query: &str, k: usize) -> Result<()> {
    let store = IndexStore::new(index);
    let idx = store.get()?;
    let hits = search(&idx, query, k);
    if hits.is_empty() {
        println!("no results");
        return Ok(());
    }
    for hit in hits {
        println!("{:>8.3}  {}  ({}, p.{})", hit.score, hit.title, hit.id, hit.page);
        println!("          {}", hit.excerpt);
    }
    Ok(())
}

/// Output of the external text-extraction service: one JSON array of page
/// strings per document, named {doc.id}.json. A missing file is a
/// per-document skip; an unparseable file fails the build.
struct ExtractedPages {
    root: PathBuf,
}

impl PageSource for ExtractedPages {
    fn pages(&self, doc: &Document) -> Result<Option<Vec<String>>> {
        let path = self.root.join(format!("{}.json", doc.id));
        if !path.exists() {
            return Ok(None);
        }
        let f = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
        let pages: Vec<String> = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("{} is not a JSON array of page strings", path.display()))?;
        Ok(Some(pages))
    }
}
