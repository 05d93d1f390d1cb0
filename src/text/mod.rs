pub mod document;
pub mod loader;
pub mod normalize;
pub mod word_table;

pub use document::{AlignedDocument, Document};
pub use loader::{load_aligned, load_directory, write_aligned, DEFAULT_ALIGNED_PREFIX};
pub use normalize::{join_tokens, normalize, tokenize};
pub use word_table::{TableFormat, WordRow, WordTable, DEFAULT_CHUNK_SIZE};
