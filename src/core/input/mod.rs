//! Input handling for the command line.
//!
//! Finds text files on disk and loads them as documents. The chunking
//! engine itself never touches the file system.

pub mod loader;
pub mod walker;

pub use loader::{DocumentLoader, LoadedDocuments, SkippedFile};
pub use walker::FileWalker;
