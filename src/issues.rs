//! Issue types for catalog checks.
//!
//! Each issue is self-contained with all information needed by the CLI
//! reporter and the MCP server to display it.

use std::fmt;

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::core::{EntryContext, TranslationStatus};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    EmptySource,
    ConflictingTranslation,
    PlaceholderMismatch,
    Unfinished,
    Obsolete,
    Untranslated,
    AcceleratorMismatch,
    #[value(skip)]
    ParseError,
}

impl Rule {
    /// Rules that can be selected on the command line, in report order.
    pub fn all() -> Vec<Rule> {
        vec![
            Rule::EmptySource,
            Rule::ConflictingTranslation,
            Rule::PlaceholderMismatch,
            Rule::Unfinished,
            Rule::Obsolete,
            Rule::Untranslated,
            Rule::AcceleratorMismatch,
        ]
    }

    pub fn severity(self) -> Severity {
        match self {
            Rule::EmptySource
            | Rule::ConflictingTranslation
            | Rule::PlaceholderMismatch
            | Rule::ParseError => Severity::Error,
            Rule::Unfinished | Rule::Obsolete | Rule::Untranslated | Rule::AcceleratorMismatch => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::EmptySource => write!(f, "empty-source"),
            Rule::ConflictingTranslation => write!(f, "conflicting-translation"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Obsolete => write!(f, "obsolete"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::AcceleratorMismatch => write!(f, "accelerator-mismatch"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Message with an empty or whitespace-only `<source>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySourceIssue {
    pub context: EntryContext,
}

impl EmptySourceIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptySource
    }
}

/// Same lookup key translated differently further up in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingTranslationIssue {
    pub context: EntryContext,
    /// Line of the message whose translation lookups will return.
    pub first_line: usize,
    pub first_translation: String,
}

impl ConflictingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ConflictingTranslation
    }
}

/// `%1`-style placeholders differ between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: EntryContext,
    /// Placeholders in the source but not in the translation.
    pub missing: Vec<String>,
    /// Placeholders in the translation but not in the source.
    pub extra: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Message still waiting for a translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: EntryContext,
    pub status: TranslationStatus,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Message kept for translation memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteIssue {
    pub context: EntryContext,
    pub status: TranslationStatus,
}

impl ObsoleteIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Obsolete
    }
}

/// Finished translation identical to the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: EntryContext,
    /// Catalog language, `?` when undeclared.
    pub language: String,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Keyboard accelerator present on only one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorMismatchIssue {
    pub context: EntryContext,
    /// True when the source has the accelerator and the translation lost it.
    pub missing_in_translation: bool,
}

impl AcceleratorMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::AcceleratorMismatch
    }
}

/// Catalog could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
    pub line: Option<usize>,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during a check.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptySource(EmptySourceIssue),
    ConflictingTranslation(ConflictingTranslationIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    Unfinished(UnfinishedIssue),
    Obsolete(ObsoleteIssue),
    Untranslated(UntranslatedIssue),
    AcceleratorMismatch(AcceleratorMismatchIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog.
    Entry(&'a EntryContext),
    /// File-level only (for ParseError).
    File { path: &'a str, line: Option<usize> },
}

impl ReportLocation<'_> {
    pub fn file_path(&self) -> &str {
        match self {
            ReportLocation::Entry(ctx) => ctx.file_path(),
            ReportLocation::File { path, .. } => path,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ReportLocation::Entry(ctx) => ctx.line(),
            ReportLocation::File { line, .. } => line.unwrap_or(0),
        }
    }

    pub fn col(&self) -> usize {
        match self {
            ReportLocation::Entry(ctx) => ctx.col(),
            ReportLocation::File { line, .. } => line.map(|_| 1).unwrap_or(0),
        }
    }
}

/// Trait for types that can be reported to CLI and MCP.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, parse error, etc.).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for EmptySourceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in context {}", self.context.context))
    }
}

impl Report for ConflictingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") conflicts with (\"{}\") at line {}",
            self.context.translation, self.first_translation, self.first_line
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("lookups use the first translation; remove or disambiguate the duplicate")
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing in translation: {}", self.missing.join(", ")));
        }
        if !self.extra.is_empty() {
            parts.push(format!("not in source: {}", self.extra.join(", ")));
        }
        Some(format!(
            "(\"{}\") {}",
            self.context.translation,
            parts.join("; ")
        ))
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.context.translation.is_empty() {
            Some(format!("no translation in {}", self.context.context))
        } else {
            Some(format!(
                "(\"{}\") marked {} in {}",
                self.context.translation, self.status, self.context.context
            ))
        }
    }
}

impl Report for ObsoleteIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("marked {} in {}", self.status, self.context.context))
    }

    fn hint(&self) -> Option<&str> {
        Some("run `tscat clean --apply` to remove stale messages")
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("identical in {}", self.language))
    }
}

impl Report for AcceleratorMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let side = if self.missing_in_translation {
            "translation has no accelerator"
        } else {
            "source has no accelerator"
        };
        Some(format!("(\"{}\") {}", self.context.translation, side))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let a = self.location();
        let b = other.location();
        a.file_path()
            .cmp(b.file_path())
            .then_with(|| a.line().cmp(&b.line()))
            .then_with(|| a.col().cmp(&b.col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
