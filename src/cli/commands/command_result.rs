use crate::{
    cli::args::StatsFormat,
    core::CatalogStats,
    issues::{Issue, ObsoleteIssue},
};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Stats(StatsSummary),
    Lookup(LookupSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct StatsSummary {
    pub format: StatsFormat,
    pub catalogs: Vec<CatalogStats>,
}

#[derive(Debug)]
pub struct LookupSummary {
    /// Translated text with arguments substituted.
    pub text: String,
    /// False when the text fell back to the source.
    pub found: bool,
}

#[derive(Debug)]
pub struct CleanSummary {
    /// Messages removed (or that would be removed).
    pub removed_messages: Vec<ObsoleteIssue>,
    /// Contexts left without messages and dropped.
    pub removed_contexts: usize,
    pub file_count: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running tscat commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// Issues to report. Empty for commands that only summarize.
    pub issues: Vec<Issue>,
    /// Number of catalogs that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalog files that were checked.
    pub files_checked: usize,
}
