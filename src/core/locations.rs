//! Resolution of `<location>` hints into absolute file/line pairs.
//!
//! Translation tooling writes locations compactly: a hint without `filename`
//! refers to the most recently named file, and a `line` starting with `+` or
//! `-` is an offset from the previous line seen for that same file. Both carry
//! over across message and context boundaries, so hints must be resolved by
//! walking the catalog in file order.

use std::collections::HashMap;

use crate::core::data::{Catalog, LineRef, LocationHint, LocationStyle};

/// An absolute source reference.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolvedLocation {
    /// File as written in the catalog (usually relative to the catalog's directory).
    pub file: String,
    pub line: Option<i64>,
}

impl ResolvedLocation {
    pub fn new(file: impl Into<String>, line: Option<i64>) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// Stateful resolver; feed hints in file order.
#[derive(Debug, Default)]
pub struct LocationResolver {
    current_file: String,
    current_line: HashMap<String, i64>,
}

impl LocationResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, hint: &LocationHint) -> ResolvedLocation {
        if let Some(filename) = &hint.filename {
            self.current_file = filename.clone();
        }
        let file = self.current_file.clone();

        let line = hint.line.map(|line| {
            let last = self.current_line.entry(file.clone()).or_insert(0);
            match line {
                LineRef::Absolute(n) => *last = n as i64,
                LineRef::Relative(delta) => *last += delta,
            }
            *last
        });

        ResolvedLocation { file, line }
    }
}

/// Resolve every message's hints. The outer vectors follow `catalog.contexts`
/// and `context.messages`.
pub fn resolve_locations(catalog: &Catalog) -> Vec<Vec<Vec<ResolvedLocation>>> {
    let mut resolver = LocationResolver::new();
    catalog
        .contexts
        .iter()
        .map(|context| {
            context
                .messages
                .iter()
                .map(|message| message.locations.iter().map(|h| resolver.resolve(h)).collect())
                .collect()
        })
        .collect()
}

/// Rewrite every hint with its explicit file and absolute line.
///
/// Call before removing or reordering messages: relative hints depend on
/// the messages before them. The catalog's `location_style` is untouched, so
/// the writer still emits the original style.
pub fn pin_locations(catalog: &mut Catalog) {
    let resolved = resolve_locations(catalog);
    for (context, resolved) in catalog.contexts.iter_mut().zip(resolved) {
        for (message, resolved) in context.messages.iter_mut().zip(resolved) {
            message.locations = resolved
                .into_iter()
                .map(|location| LocationHint {
                    filename: Some(location.file).filter(|f| !f.is_empty()),
                    line: location.line.map(|n| LineRef::Absolute(n.max(0) as usize)),
                })
                .collect();
        }
    }
}

/// Inverse of [`LocationResolver`]: turns absolute locations back into hints in
/// the requested style.
#[derive(Debug, Default)]
pub struct LocationEncoder {
    style: LocationStyle,
    current_file: String,
    current_line: HashMap<String, i64>,
}

impl LocationEncoder {
    pub fn new(style: LocationStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Absolute style names the file on every location; the other styles
    /// name it only when it changes.
    pub fn encode(&mut self, location: &ResolvedLocation) -> LocationHint {
        let repeat_file = self.style == LocationStyle::Absolute && !location.file.is_empty();
        let filename = if self.current_file == location.file && !repeat_file {
            None
        } else {
            self.current_file = location.file.clone();
            Some(location.file.clone())
        };

        let line = match (self.style, location.line) {
            (_, None) | (LocationStyle::None, _) => None,
            (LocationStyle::Absolute, Some(line)) => {
                self.current_line.insert(location.file.clone(), line);
                Some(LineRef::Absolute(line.max(0) as usize))
            }
            (LocationStyle::Relative, Some(line)) => {
                let last = self.current_line.entry(location.file.clone()).or_insert(0);
                let delta = line - *last;
                *last = line;
                Some(LineRef::Relative(delta))
            }
        };

        LocationHint { filename, line }
    }
}
