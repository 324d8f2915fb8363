//! Catalog hygiene rules.
//!
//! Each rule module exposes a pure `check_*` function over one
//! [`CatalogFile`](crate::core::CatalogFile) and a `check_*_issues` wrapper that
//! runs it across every catalog in a [`CheckContext`](crate::core::CheckContext).
//!
//! ## Module Structure
//!
//! - `empty_source`: Messages without source text
//! - `conflicting`: Duplicate lookup keys with different translations
//! - `placeholder`: `%1`/`%n` placeholders lost or invented by the translation
//! - `unfinished`: Messages still waiting for a translator
//! - `obsolete`: Stale messages kept for translation memory
//! - `untranslated`: Translations identical to the source
//! - `accelerator`: Keyboard accelerators present on one side only

pub mod accelerator;
pub mod conflicting;
pub mod empty_source;
pub mod obsolete;
pub mod placeholder;
pub mod unfinished;
pub mod untranslated;

use crate::{
    core::CheckContext,
    issues::{Issue, Rule},
};

/// Run the selected rules over every loaded catalog.
pub fn run_rules(ctx: &CheckContext, rules: &[Rule]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for rule in rules {
        match rule {
            Rule::EmptySource => issues.extend(
                empty_source::check_empty_source_issues(ctx)
                    .into_iter()
                    .map(Issue::EmptySource),
            ),
            Rule::ConflictingTranslation => issues.extend(
                conflicting::check_conflicting_translation_issues(ctx)
                    .into_iter()
                    .map(Issue::ConflictingTranslation),
            ),
            Rule::PlaceholderMismatch => issues.extend(
                placeholder::check_placeholder_mismatch_issues(ctx)
                    .into_iter()
                    .map(Issue::PlaceholderMismatch),
            ),
            Rule::Unfinished => issues.extend(
                unfinished::check_unfinished_issues(ctx)
                    .into_iter()
                    .map(Issue::Unfinished),
            ),
            Rule::Obsolete => issues.extend(
                obsolete::check_obsolete_issues(ctx)
                    .into_iter()
                    .map(Issue::Obsolete),
            ),
            Rule::Untranslated => issues.extend(
                untranslated::check_untranslated_issues(ctx)
                    .into_iter()
                    .map(Issue::Untranslated),
            ),
            Rule::AcceleratorMismatch => issues.extend(
                accelerator::check_accelerator_mismatch_issues(ctx)
                    .into_iter()
                    .map(Issue::AcceleratorMismatch),
            ),
            Rule::ParseError => {
                issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError))
            }
        }
    }

    issues
}
