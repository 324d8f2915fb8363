//! tscat - Qt Linguist translation catalog toolkit
//!
//! tscat reads and writes Qt Linguist `.ts` catalogs, resolves translations
//! the way a running application would, and lints catalogs for problems such
//! as lost placeholders, conflicting duplicates and stale messages.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, `.ts` reader/writer, locations and lookup
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Lint rules over loaded catalogs
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
