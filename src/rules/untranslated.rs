//! Untranslated value detection rule.
//!
//! Detects finished translations identical to the source text, which usually
//! means the translator copied the source and moved on. Texts without
//! alphabetic characters and texts listed in `ignoreTexts` are exempt.

use std::collections::HashSet;

use crate::{
    core::{CatalogFile, CheckContext},
    issues::UntranslatedIssue,
    utils::contains_alphabetic,
};

pub fn check_untranslated_issues(ctx: &CheckContext) -> Vec<UntranslatedIssue> {
    ctx.catalogs
        .iter()
        .flat_map(|file| check_untranslated(file, &ctx.ignore_texts))
        .collect()
}

pub fn check_untranslated(file: &CatalogFile, ignore_texts: &HashSet<String>) -> Vec<UntranslatedIssue> {
    let language = file.catalog.language_or_unknown();

    file.catalog
        .messages()
        .filter(|(_, message)| {
            message.is_finished()
                && !message.translation.is_empty()
                && message.translation_text() == message.source
                && contains_alphabetic(&message.source)
                && !ignore_texts.contains(&message.source)
        })
        .map(|(context, message)| UntranslatedIssue {
            context: file.entry(context, message),
            language: language.to_string(),
        })
        .collect()
}
