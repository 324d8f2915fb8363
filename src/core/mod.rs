//! Core catalog engine.
//!
//! ## Module Structure
//!
//! - `data`: Catalog model and report-facing entry types
//! - `parsers`: `.ts` reader and writer
//! - `locations`: Relative/absolute location hint resolution
//! - `translator`: Lookup with fallback to the source text
//! - `stats`: Translation progress counters
//! - `file_scanner`: Catalog discovery under the project root
//! - `context`: `CheckContext`, the loaded set of catalogs a command works on

pub mod catalog_file;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod locations;
pub mod parsers;
pub mod stats;
pub mod translator;

pub use catalog_file::CatalogFile;
pub use context::CheckContext;
pub use data::{
    Catalog, Context, EntryContext, LineRef, LocationHint, LocationStyle, Message,
    MessageLocation, SourcePosition, Translation, TranslationStatus,
};
pub use locations::{LocationResolver, ResolvedLocation, resolve_locations};
pub use stats::CatalogStats;
pub use translator::{LookupOptions, Translator, substitute_args};
