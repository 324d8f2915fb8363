use std::fs;

use anyhow::{Context as _, Result};

use super::super::args::CleanCommand;
use super::{CleanSummary, CommandResult, CommandSummary, helper::finish};
use crate::{
    core::{Catalog, CheckContext, locations::pin_locations, parsers::writer::write_catalog},
    issues::{Issue, ObsoleteIssue},
    rules::obsolete::check_obsolete,
};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let apply = cmd.apply;

    let mut removed_messages: Vec<ObsoleteIssue> = Vec::new();
    let mut removed_contexts = 0;
    let mut file_count = 0;

    for file in &ctx.catalogs {
        let stale = check_obsolete(file);
        if stale.is_empty() {
            continue;
        }
        file_count += 1;

        let mut catalog = file.catalog.clone();
        removed_contexts += remove_stale_messages(&mut catalog);
        if apply {
            fs::write(&catalog.file_path, write_catalog(&catalog))
                .with_context(|| format!("Failed to write catalog: {}", catalog.file_path))?;
            tracing::debug!(path = %catalog.file_path, removed = stale.len(), "catalog cleaned");
        }
        removed_messages.extend(stale);
    }

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            removed_messages,
            removed_contexts,
            file_count,
            is_apply: apply,
        }),
        issues,
        ctx.files_checked(),
        false,
    ))
}

/// Drop obsolete and vanished messages, then contexts they left empty.
///
/// Returns the number of contexts removed.
pub fn remove_stale_messages(catalog: &mut Catalog) -> usize {
    pin_locations(catalog);
    let before = catalog.contexts.len();
    catalog.contexts.retain_mut(|context| {
        let had_messages = !context.messages.is_empty();
        context.messages.retain(|message| !message.is_stale());
        !(had_messages && context.messages.is_empty())
    });
    before - catalog.contexts.len()
}
