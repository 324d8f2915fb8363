//! Placeholder mismatch detection rule.
//!
//! `%1`..`%99` are filled by position at runtime, so a translation that drops
//! or invents one renders wrong text. `%L1` is the localized-number form of
//! `%1` and counts as the same placeholder.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use crate::{
    core::{CatalogFile, CheckContext},
    issues::PlaceholderMismatchIssue,
};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?([1-9][0-9]?|n)").unwrap());

pub fn check_placeholder_mismatch_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    ctx.catalogs
        .iter()
        .flat_map(check_placeholder_mismatch)
        .collect()
}

pub fn check_placeholder_mismatch(file: &CatalogFile) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for (context, message) in file.catalog.messages() {
        if message.is_stale() {
            continue;
        }

        let mut expected = placeholders(&message.source);
        // Plural forms such as "one file" may spell out the count.
        if message.numerus {
            expected.remove("%n");
        }

        for text in message.translation.texts() {
            if text.is_empty() {
                continue;
            }
            let mut found = placeholders(text);
            if message.numerus {
                found.remove("%n");
            }
            if found != expected {
                let (missing, extra) = difference(&expected, &found);
                issues.push(PlaceholderMismatchIssue {
                    context: file.entry(context, message).with_translation(text),
                    missing,
                    extra,
                });
                break;
            }
        }
    }

    issues
}

/// Placeholder multiset, keyed by normalized spelling (`%L1` counts as `%1`).
fn placeholders(text: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for caps in PLACEHOLDER.captures_iter(text) {
        *counts.entry(format!("%{}", &caps[1])).or_insert(0) += 1;
    }
    counts
}

fn difference(
    expected: &BTreeMap<String, usize>,
    found: &BTreeMap<String, usize>,
) -> (Vec<String>, Vec<String>) {
    let surplus = |a: &BTreeMap<String, usize>, b: &BTreeMap<String, usize>| {
        a.iter()
            .flat_map(|(name, count)| {
                let other = b.get(name).copied().unwrap_or(0);
                std::iter::repeat_n(name.clone(), count.saturating_sub(other))
            })
            .collect::<Vec<_>>()
    };
    (surplus(expected, found), surplus(found, expected))
}
