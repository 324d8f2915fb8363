use std::{fs, path::Path};

use crate::{
    core::{
        data::{Catalog, Context, EntryContext, Message},
        parsers::ts::{CatalogError, parse_catalog},
    },
    utils::LineIndex,
};

/// A parsed catalog together with the text it was parsed from.
///
/// Rules work on this rather than a bare [`Catalog`] so diagnostics can quote
/// the offending `.ts` line.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    pub catalog: Catalog,
    content: String,
    line_index: LineIndex,
}

impl CatalogFile {
    pub fn parse(file_path: &str, content: String) -> Result<Self, CatalogError> {
        let catalog = parse_catalog(&content, file_path)?;
        let line_index = LineIndex::new(&content);
        Ok(Self {
            catalog,
            content,
            line_index,
        })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&path.to_string_lossy(), content)
    }

    pub fn path(&self) -> &str {
        &self.catalog.file_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn line_text(&self, line: usize) -> Option<&str> {
        self.line_index.line_text(&self.content, line)
    }

    /// Report context for one of this catalog's messages.
    pub fn entry(&self, context: &Context, message: &Message) -> EntryContext {
        let entry = EntryContext::from_message(&self.catalog, context, message);
        match self.line_text(message.position.line) {
            Some(line) => entry.with_source_line(line),
            None => entry,
        }
    }
}
