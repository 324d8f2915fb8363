//! Accelerator mismatch detection rule.
//!
//! Menu labels mark their keyboard mnemonic with `&` (`&File`); `&&` is a
//! literal ampersand. CJK translations usually append the mnemonic in
//! parentheses (`檔案(&F)`), which still counts as an accelerator.

use crate::{
    core::{CatalogFile, CheckContext},
    issues::AcceleratorMismatchIssue,
};

pub fn check_accelerator_mismatch_issues(ctx: &CheckContext) -> Vec<AcceleratorMismatchIssue> {
    ctx.catalogs
        .iter()
        .flat_map(check_accelerator_mismatch)
        .collect()
}

pub fn check_accelerator_mismatch(file: &CatalogFile) -> Vec<AcceleratorMismatchIssue> {
    let mut issues = Vec::new();

    for (context, message) in file.catalog.messages() {
        if !message.is_finished() || message.translation.is_empty() {
            continue;
        }
        let in_source = has_accelerator(&message.source);
        let in_translation = message.translation.texts().iter().any(|t| has_accelerator(t));
        if in_source != in_translation {
            issues.push(AcceleratorMismatchIssue {
                context: file.entry(context, message),
                missing_in_translation: in_source,
            });
        }
    }

    issues
}

/// True if `text` has an `&` followed by a character that can be a mnemonic.
pub fn has_accelerator(text: &str) -> bool {
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        match chars.next() {
            Some('&') => continue,
            Some(next) if !next.is_whitespace() => return true,
            _ => {}
        }
    }
    false
}
