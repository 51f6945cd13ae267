pub mod builder;
pub mod chunker;
pub mod persist;
pub mod retriever;
pub mod store;
pub mod tokenizer;

mod index;

pub use index::{Chunk, Document, Index};
