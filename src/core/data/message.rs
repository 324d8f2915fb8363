use super::catalog::{Catalog, Context, Message};

/// Position information in a catalog file.
///
/// Represents a specific location in a `.ts` file, used for error reporting
/// when there are issues with a message.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the catalog file (e.g., "./translations/Mesh_it.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// A message as it is shown in reports: where it sits and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    pub location: MessageLocation,
    /// Name of the enclosing `<context>`.
    pub context: String,
    /// Source text of the message.
    pub source: String,
    /// Translated text (first plural form for numerus messages).
    pub translation: String,
    /// The `.ts` line holding the `<source>` element, shown under diagnostics.
    pub source_line: String,
}

impl EntryContext {
    pub fn new(
        location: MessageLocation,
        context: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            location,
            context: context.into(),
            source: source.into(),
            translation: translation.into(),
            source_line: String::new(),
        }
    }

    /// Report a specific plural form instead of the first one.
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn with_source_line(mut self, source_line: impl Into<String>) -> Self {
        self.source_line = source_line.into();
        self
    }

    /// Build the report context for a message of a parsed catalog.
    pub fn from_message(catalog: &Catalog, context: &Context, message: &Message) -> Self {
        Self::new(
            MessageLocation::new(
                &catalog.file_path,
                message.position.line,
                message.position.col,
            ),
            &context.name,
            &message.source,
            message.translation_text(),
        )
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
