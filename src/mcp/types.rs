use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::CatalogStats;
use crate::issues::{Issue, Report, ReportLocation};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCatalogsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only return issues of this rule (e.g. "placeholder-mismatch")
    pub rule: Option<String>,
    /// Only scan catalogs of this language
    pub language: Option<String>,
    /// Page size (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only report catalogs of this language
    pub language: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupMessageParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Catalog path, relative to the project root
    pub catalog: String,
    /// Context name, e.g. "CmdMeshUnion"
    pub context: String,
    /// Source text
    pub source: String,
    /// Disambiguation comment
    pub comment: Option<String>,
    /// Count for plural selection; replaces `%n`
    pub count: Option<i64>,
    /// Values for `%1`, `%2`, ...
    pub args: Option<Vec<String>>,
    /// Also return translations marked unfinished
    pub include_unfinished: Option<bool>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_texts: Vec<String>,
    pub include_unfinished: bool,
    pub source_language: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            includes: c.includes,
            ignores: c.ignores,
            ignore_texts: c.ignore_texts,
            include_unfinished: c.include_unfinished,
            source_language: c.source_language,
        }
    }
}

// ============================================================
// Catalog Listing (list_catalogs)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub catalogs: Vec<CatalogInfo>,
    pub parse_errors: Vec<ParseErrorItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub file_path: String,
    pub language: Option<String>,
    /// Declared source language, else the configured one
    pub source_language: String,
    pub context_count: usize,
    pub message_count: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

// ============================================================
// Scan Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview - counts only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub catalog_count: usize,
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// One entry per rule with at least one issue
    pub rules: Vec<RuleCount>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleCount {
    pub rule: String,
    pub severity: String,
    pub count: usize,
    pub file_count: usize,
}

// ============================================================
// Issue Scan Types (scan_issues)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuesScanResult {
    pub total_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

/// A single issue as returned to the agent
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    /// Context name, absent for parse errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let loc = issue.location();
        let context = match &loc {
            ReportLocation::Entry(ctx) => Some(ctx.context.clone()),
            ReportLocation::File { .. } => None,
        };
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            file_path: loc.file_path().to_string(),
            line: loc.line(),
            col: loc.col(),
            context,
            message: issue.message(),
            details: issue.details(),
            hint: issue.hint().map(str::to_string),
        }
    }
}

// ============================================================
// Stats Types (catalog_stats)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    pub catalogs: Vec<CatalogStatsItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatsItem {
    pub file_path: String,
    pub language: Option<String>,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
    /// Percentage of live messages that are finished
    pub completion: f64,
}

impl From<&CatalogStats> for CatalogStatsItem {
    fn from(stats: &CatalogStats) -> Self {
        Self {
            file_path: stats.file_path.clone(),
            language: stats.language.clone(),
            contexts: stats.contexts,
            messages: stats.messages,
            finished: stats.finished,
            unfinished: stats.unfinished,
            obsolete: stats.obsolete,
            completion: (stats.completion() * 10.0).round() / 10.0,
        }
    }
}

// ============================================================
// Lookup Types (lookup_message)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// Translated text, or the source when no usable translation exists
    pub text: String,
    pub found: bool,
    pub language: Option<String>,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
