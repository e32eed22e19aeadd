//! # Locator Indexer
//!
//! Builds the [`ProjectManifest`](locator_protocol::ProjectManifest) the
//! intent classifier and content search consume, straight from a React
//! project on disk.
//!
//! ## Pipeline
//!
//! ```text
//! Directory
//!     │
//!     ├──> File Scanner (.gitignore aware)
//!     │      └─> sources, stylesheets, config files
//!     │
//!     ├──> Parser (regex)
//!     │      └─> file type, imports, component info, routes
//!     │
//!     └──> Manifest
//!            └─> entry point, component tree, style files
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use locator_indexer::ManifestBuilder;
//!
//! fn main() -> locator_indexer::Result<()> {
//!     let manifest = ManifestBuilder::new("/path/to/project").build()?;
//!     println!("{} files, entry point {}", manifest.files.len(), manifest.entry_point);
//!     Ok(())
//! }
//! ```

mod builder;
mod error;
mod parser;
mod scanner;
mod stats;

pub use builder::ManifestBuilder;
pub use error::{IndexerError, Result};
pub use parser::{classify_file_type, extract_component_info, extract_imports, extract_routes};
pub use scanner::{FileScanner, ProjectFileKind};
pub use stats::ManifestStats;
