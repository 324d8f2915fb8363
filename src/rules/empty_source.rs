//! Empty source detection rule.
//!
//! A message without source text can never be looked up; the tooling
//! produces these when a `tr("")` call is extracted.

use crate::{core::CatalogFile, core::CheckContext, issues::EmptySourceIssue};

pub fn check_empty_source_issues(ctx: &CheckContext) -> Vec<EmptySourceIssue> {
    ctx.catalogs.iter().flat_map(check_empty_source).collect()
}

pub fn check_empty_source(file: &CatalogFile) -> Vec<EmptySourceIssue> {
    file.catalog
        .messages()
        .filter(|(_, message)| message.source.trim().is_empty())
        .map(|(context, message)| EmptySourceIssue {
            context: file.entry(context, message),
        })
        .collect()
}
