//! Conflicting translation detection rule.
//!
//! Tooling output occasionally carries the same (context, source, comment)
//! key twice. Lookups return the first usable translation, so a later
//! duplicate with a different text is dead weight that hides a disagreement.

use std::collections::{HashMap, hash_map::Entry};

use crate::{
    core::{CatalogFile, CheckContext, Translation},
    issues::ConflictingTranslationIssue,
};

pub fn check_conflicting_translation_issues(ctx: &CheckContext) -> Vec<ConflictingTranslationIssue> {
    ctx.catalogs
        .iter()
        .flat_map(check_conflicting_translation)
        .collect()
}

pub fn check_conflicting_translation(file: &CatalogFile) -> Vec<ConflictingTranslationIssue> {
    let mut first_seen: HashMap<(&str, &str, &str), (usize, &Translation)> = HashMap::new();
    let mut issues = Vec::new();

    for (context, message) in file.catalog.messages() {
        if message.is_stale() || message.translation.is_empty() {
            continue;
        }
        let key = (
            context.name.as_str(),
            message.source.as_str(),
            message.disambiguation().unwrap_or_default(),
        );

        match first_seen.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert((message.position.line, &message.translation));
            }
            Entry::Occupied(entry) => {
                let (first_line, first) = *entry.get();
                if *first != message.translation {
                    issues.push(ConflictingTranslationIssue {
                        context: file.entry(context, message),
                        first_line,
                        first_translation: first.text().to_string(),
                    });
                }
            }
        }
    }

    issues
}
