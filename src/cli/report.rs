//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept apart from the command
//! logic so tscat can be used as a library without touching stdout.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::StatsFormat,
    commands::{
        CleanSummary, CommandResult, CommandSummary, InitSummary, LookupSummary, StatsSummary,
    },
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::CatalogStats;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Issues are sorted by file, line and rule before printing.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = sorted
        .iter()
        .map(|issue| issue.location().line())
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(files_checked: usize) {
    print_success_to(files_checked, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(files_checked: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} {} - no issues found",
        files_checked,
        if files_checked == 1 {
            "catalog"
        } else {
            "catalogs"
        }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about catalogs that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} catalog(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Check => {
            report_to(&result.issues, stdout);
            if result.issues.is_empty() {
                print_success_to(result.files_checked, stdout);
            }
        }
        CommandSummary::Stats(summary) => print_stats_to(summary, stdout),
        CommandSummary::Lookup(summary) => {
            print_lookup_to(summary, stdout);
            if verbose && !summary.found {
                let _ = writeln!(
                    io::stderr().lock(),
                    "{} no translation found, showing source text",
                    "note:".bold()
                );
            }
        }
        CommandSummary::Clean(summary) => print_clean_to(summary, stdout),
        CommandSummary::Init(summary) => print_init(summary),
    }

    // Check reports parse errors inline; other commands keep stdout clean.
    if !matches!(result.summary, CommandSummary::Check) {
        print_parse_warning(result.parse_error_count, verbose);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (line, col) = (loc.line(), loc.col());

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    if line > 0 {
        let _ = writeln!(
            writer,
            "  {} {}:{}:{}",
            "-->".blue(),
            loc.file_path(),
            line,
            col
        );
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), loc.file_path());
    }

    if let ReportLocation::Entry(ctx) = &loc
        && !ctx.source_line.is_empty()
    {
        print_source_line(
            &ctx.source_line,
            line,
            col,
            severity,
            writer,
            max_line_width,
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_source_line<W: Write>(
    source_line: &str,
    line: usize,
    col: usize,
    severity: Severity,
    writer: &mut W,
    max_line_width: usize,
) {
    let caret_char = match severity {
        Severity::Error => "^".red(),
        Severity::Warning => "^".yellow(),
    };

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    // col is 1-based
    let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret_char,
        width = max_line_width,
        padding = caret_padding
    );
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        if issues.len() == 1 {
            "problem"
        } else {
            "problems"
        },
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    match summary.format {
        StatsFormat::Json => match serde_json::to_string_pretty(&summary.catalogs) {
            Ok(json) => {
                let _ = writeln!(writer, "{}", json);
            }
            Err(e) => tracing::error!("failed to serialize stats: {}", e),
        },
        StatsFormat::Text => print_stats_table(&summary.catalogs, writer),
    }
}

fn print_stats_table<W: Write>(catalogs: &[CatalogStats], writer: &mut W) {
    if catalogs.is_empty() {
        let _ = writeln!(writer, "No catalogs found.");
        return;
    }

    let path_width = catalogs
        .iter()
        .map(|s| UnicodeWidthStr::width(s.file_path.as_str()))
        .max()
        .unwrap_or(0)
        .max("Catalog".len());

    let header = format!(
        "{:<path_width$}  {:<6} {:>8} {:>10} {:>8} {:>8}",
        "Catalog", "Lang", "Finished", "Unfinished", "Obsolete", "Done",
    );
    let _ = writeln!(writer, "{}", header.bold());

    for stats in catalogs {
        let pad = path_width - UnicodeWidthStr::width(stats.file_path.as_str());
        let completion = format!("{:>8}", format!("{:.1}%", stats.completion()));
        let completion = if stats.unfinished == 0 {
            completion.green()
        } else {
            completion.yellow()
        };
        let _ = writeln!(
            writer,
            "{}{:pad$}  {:<6} {:>8} {:>10} {:>8} {}",
            stats.file_path,
            "",
            stats.language.as_deref().unwrap_or("?"),
            stats.finished,
            stats.unfinished,
            stats.obsolete,
            completion,
        );
    }
}

fn print_lookup_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.text);
}

fn print_clean_to<W: Write>(summary: &CleanSummary, writer: &mut W) {
    let total = summary.removed_messages.len();
    if total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No obsolete messages found".green()
        );
        return;
    }

    if !summary.is_apply {
        for issue in &summary.removed_messages {
            let ctx = &issue.context;
            let _ = writeln!(
                writer,
                "  {} {}:{}  {}  \"{}\"",
                "-".red(),
                ctx.file_path(),
                ctx.line(),
                ctx.context.dimmed(),
                ctx.source
            );
        }
        let _ = writeln!(writer);
    }

    let verb = if summary.is_apply {
        "Removed".green().bold()
    } else {
        "Would remove".yellow().bold()
    };
    let _ = writeln!(
        writer,
        "{} {} message(s) in {} file(s).",
        verb, total, summary.file_count
    );
    if summary.removed_contexts > 0 {
        let _ = writeln!(
            writer,
            "  - {} empty context(s) dropped",
            summary.removed_contexts
        );
    }
    if !summary.is_apply {
        let _ = writeln!(
            writer,
            "Run with {} to remove these messages.",
            "--apply".cyan()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else if let Some(error) = &summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    }
}

// ============================================================
// Tests
// ============================================================
