//! File I/O: account ingestion and TGF export.

pub mod tgf;
pub mod tsv;

pub use tgf::TgfWriter;
pub use tsv::AccountReader;
