use serde::Serialize;

use crate::core::data::{Catalog, TranslationStatus};

/// Translation progress of one catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub file_path: String,
    pub language: Option<String>,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    /// Unfinished flag set, or finished with nothing translated.
    pub unfinished: usize,
    /// Obsolete and vanished.
    pub obsolete: usize,
}

impl CatalogStats {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut stats = Self {
            file_path: catalog.file_path.clone(),
            language: catalog.language.clone(),
            contexts: catalog.contexts.len(),
            ..Default::default()
        };

        for (_, message) in catalog.messages() {
            stats.messages += 1;
            match message.status {
                TranslationStatus::Obsolete | TranslationStatus::Vanished => stats.obsolete += 1,
                TranslationStatus::Finished if !message.translation.is_empty() => {
                    stats.finished += 1
                }
                TranslationStatus::Finished | TranslationStatus::Unfinished => {
                    stats.unfinished += 1
                }
            }
        }

        stats
    }

    /// Percentage of live messages with a finished translation.
    pub fn completion(&self) -> f64 {
        let live = self.finished + self.unfinished;
        if live == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / live as f64
        }
    }
}
