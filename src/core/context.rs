use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{catalog_file::CatalogFile, file_scanner::scan_files},
    issues::ParseErrorIssue,
};

/// The set of catalogs a command works on.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--path`, `--language`)
/// 2. `.tscatrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory.
    pub root_dir: PathBuf,

    /// Successfully parsed catalogs, sorted by path.
    pub catalogs: Vec<CatalogFile>,

    /// Source texts exempt from the untranslated rule (from config `ignoreTexts`).
    pub ignore_texts: HashSet<String>,

    pub verbose: bool,

    /// Number of `.ts` files that parsed or failed to parse, after the language filter.
    files_checked: usize,

    parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// Load config, scan for catalogs and parse them.
    ///
    /// A catalog that fails to parse does not fail the context; it is
    /// available from [`CheckContext::parse_errors`].
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .tscatrc.json found, using default configuration");
        }

        let config = config_result.config;

        let scan = scan_files(path, &config.includes, &config.ignores, verbose);
        tracing::debug!(
            catalogs = scan.files.len(),
            skipped = scan.skipped_count,
            non_catalogs = scan.non_catalog_count,
            "scan finished"
        );

        let results: Vec<(String, Result<CatalogFile, ParseErrorIssue>)> = scan
            .files
            .into_par_iter()
            .map(|file_path| {
                let result = CatalogFile::load(Path::new(&file_path)).map_err(|e| {
                    tracing::debug!(path = %file_path, error = %e, "catalog failed to parse");
                    ParseErrorIssue {
                        file_path: file_path.clone(),
                        line: e.line(),
                        error: e.to_string(),
                    }
                });
                (file_path, result)
            })
            .collect();

        let mut catalogs = Vec::new();
        let mut parse_errors = Vec::new();
        for (file_path, result) in results {
            match result {
                Ok(file) => {
                    if language_selected(&common_args.language, file.catalog.language.as_deref())
                    {
                        catalogs.push(file);
                    } else {
                        tracing::debug!(path = %file_path, "catalog filtered out by language");
                    }
                }
                Err(issue) => {
                    if verbose {
                        eprintln!(
                            "{} {}: {}",
                            "warning:".bold().yellow(),
                            issue.file_path,
                            issue.error
                        );
                    }
                    // Language is unknown for a broken catalog; keep it unless filtering.
                    if common_args.language.is_empty() {
                        parse_errors.push(issue);
                    }
                }
            }
        }
        catalogs.sort_by(|a, b| a.path().cmp(b.path()));

        let ignore_texts = config.ignore_texts.iter().cloned().collect();

        Ok(Self {
            files_checked: catalogs.len() + parse_errors.len(),
            config,
            root_dir,
            catalogs,
            ignore_texts,
            verbose,
            parse_errors,
        })
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parse_errors
    }

    pub fn files_checked(&self) -> usize {
        self.files_checked
    }

    /// Declared source language of a catalog, else the configured one.
    pub fn source_language<'a>(&'a self, file: &'a CatalogFile) -> &'a str {
        file.catalog
            .source_language
            .as_deref()
            .unwrap_or(&self.config.source_language)
    }

    /// Find a loaded catalog by path, as given or relative to the root.
    pub fn find_catalog(&self, path: &str) -> Option<&CatalogFile> {
        let joined = self.root_dir.join(path);
        let joined = joined.to_string_lossy();
        self.catalogs.iter().find(|file| {
            let file_path = Path::new(file.path());
            file.path() == path || file.path() == joined || file_path.ends_with(path)
        })
    }
}

fn language_selected(filter: &[String], language: Option<&str>) -> bool {
    filter.is_empty()
        || language.is_some_and(|lang| filter.iter().any(|f| f.eq_ignore_ascii_case(lang)))
}
