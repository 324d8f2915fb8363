//! Unfinished translation detection rule.
//!
//! Reports live messages a translator has not signed off: those marked
//! `unfinished`, and those with an empty translation whatever their flag.

use crate::{
    core::{CatalogFile, CheckContext},
    issues::UnfinishedIssue,
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    ctx.catalogs.iter().flat_map(check_unfinished).collect()
}

pub fn check_unfinished(file: &CatalogFile) -> Vec<UnfinishedIssue> {
    file.catalog
        .messages()
        .filter(|(_, message)| {
            !message.is_stale() && (!message.is_finished() || message.translation.is_empty())
        })
        .map(|(context, message)| UnfinishedIssue {
            context: file.entry(context, message),
            status: message.status,
        })
        .collect()
}
