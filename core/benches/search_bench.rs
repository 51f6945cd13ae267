use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion};
use guideline_core::builder::{build_index, ChunkParams, PageSource};
use guideline_core::retriever::search;
use guideline_core::tokenizer::tokenize;
use guideline_core::Document;

const PAGE: &str = "Metformin remains first-line therapy for glycemic control; \
consider dose adjustment or an alternative agent when renal function declines. \
SGLT2 inhibitors and GLP-1 receptor agonists carry cardiovascular and renal \
benefit in patients with established disease. ";

struct StaticPages;

impl PageSource for StaticPages {
    fn pages(&self, _doc: &Document) -> Result<Option<Vec<String>>> {
        Ok(Some(vec![PAGE.repeat(40); 8]))
    }
}

fn bench_tokenize(c: &mut Criterion) {
    let text = PAGE.repeat(50);
    c.bench_function("tokenize_page", |b| b.iter(|| tokenize(&text)));
}

fn bench_search(c: &mut Criterion) {
    let docs = vec![Document {
        id: "ada".into(),
        title: "ADA Standards".into(),
        file: "ada.pdf".into(),
    }];
    let index = build_index(&docs, &StaticPages, ChunkParams::default()).unwrap();
    c.bench_function("search_topk", |b| {
        b.iter(|| search(&index, "metformin renal dosing", 4))
    });
}

criterion_group!(benches, bench_tokenize, bench_search);
criterion_main!(benches);
