//! Runtime-style lookup over a parsed catalog.
//!
//! Mirrors what the GUI toolkit's translator does with a compiled catalog:
//! messages are keyed by (context, source, disambiguation comment), and any
//! miss falls back to the source text.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::data::{Catalog, Translation, TranslationStatus};

/// Matches `%1`..`%99`, with optional `L` (localized number) flag.
static ARG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?([1-9][0-9]?)").unwrap());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Serve translations still marked `unfinished`.
    pub include_unfinished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MessageKey {
    context: String,
    source: String,
    comment: String,
}

impl MessageKey {
    fn new(context: &str, source: &str, comment: Option<&str>) -> Self {
        Self {
            context: context.to_string(),
            source: source.to_string(),
            comment: comment.unwrap_or_default().to_string(),
        }
    }
}

/// Lookup table built from one catalog.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    language: Option<String>,
    entries: HashMap<MessageKey, Translation>,
}

impl Translator {
    pub fn from_catalog(catalog: &Catalog, options: LookupOptions) -> Self {
        let mut entries = HashMap::new();

        for (context, message) in catalog.messages() {
            let usable = match message.status {
                TranslationStatus::Finished => true,
                TranslationStatus::Unfinished => options.include_unfinished,
                TranslationStatus::Obsolete | TranslationStatus::Vanished => false,
            };
            if !usable || message.translation.is_empty() {
                continue;
            }

            // First indexed message wins on duplicate keys.
            entries
                .entry(MessageKey::new(
                    &context.name,
                    &message.source,
                    message.disambiguation(),
                ))
                .or_insert_with(|| message.translation.clone());
        }

        Self {
            language: catalog.language.clone(),
            entries,
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&Translation> {
        let comment = comment.filter(|c| !c.is_empty());
        self.entries
            .get(&MessageKey::new(context, source, comment))
            .or_else(|| {
                comment.and_then(|_| self.entries.get(&MessageKey::new(context, source, None)))
            })
    }

    /// Translation for the message, if the catalog has a usable one.
    ///
    /// A miss with a disambiguation comment retries without the comment.
    pub fn lookup(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&str> {
        self.find(context, source, comment)
            .map(Translation::text)
            .filter(|text| !text.is_empty())
    }

    /// Translation for the message, or `source` itself on a miss.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str, comment: Option<&str>) -> &'a str {
        self.lookup(context, source, comment).unwrap_or(source)
    }

    /// Plural-aware lookup: form 0 for `n == 1`, form 1 otherwise, clamped to
    /// the forms the catalog provides. `%n` is replaced with `n`.
    pub fn translate_plural(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: i64,
    ) -> String {
        let text = match self.find(context, source, comment) {
            Some(Translation::Plural(forms)) if !forms.is_empty() => {
                let index = (if n == 1 { 0 } else { 1 }).min(forms.len() - 1);
                let form = &forms[index];
                if form.is_empty() { source } else { form.as_str() }
            }
            Some(Translation::Singular(text)) if !text.is_empty() => text.as_str(),
            _ => source,
        };
        text.replace("%n", &n.to_string())
    }
}

/// Fill placeholders the way a multi-argument `arg()` call does.
///
/// `args[0]` replaces the lowest-numbered marker present, `args[1]` the next
/// lowest, and so on, whatever the actual numbers are. Markers left over
/// when the arguments run out stay untouched.
pub fn substitute_args(template: &str, args: &[&str]) -> String {
    let mut markers: Vec<u32> = ARG_PATTERN
        .captures_iter(template)
        .filter_map(|caps| caps[1].parse().ok())
        .collect();
    markers.sort_unstable();
    markers.dedup();
    let slots: HashMap<u32, &str> = markers.into_iter().zip(args.iter().copied()).collect();

    ARG_PATTERN
        .replace_all(template, |caps: &Captures| {
            caps[1]
                .parse::<u32>()
                .ok()
                .and_then(|n| slots.get(&n))
                .map(|arg| arg.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
