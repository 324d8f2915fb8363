use std::{
    collections::BTreeSet,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::{
    config::{BUILTIN_IGNORE_PATTERNS, is_glob_pattern},
    core::parsers::ts::has_catalog_root,
};

/// Result of scanning files.
pub struct ScanResult {
    /// Catalog paths, sorted.
    pub files: BTreeSet<String>,
    /// Entries that could not be accessed.
    pub skipped_count: usize,
    /// `.ts` files that are not XML catalogs (TypeScript sources).
    pub non_catalog_count: usize,
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;
    let mut non_catalog_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(Path::new(base_dir).join(p));
        }
    }

    for p in BUILTIN_IGNORE_PATTERNS {
        if let Ok(pattern) = Pattern::new(p) {
            glob_patterns.push(pattern);
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![Path::new(base_dir).to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                let full_pattern = Path::new(base_dir).join(inc);
                let pattern_str = full_pattern.to_string_lossy();
                match glob(&pattern_str) {
                    Ok(entries) => {
                        for entry in entries.flatten() {
                            if entry.is_dir() {
                                paths.push(entry);
                            }
                        }
                    }
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                let path = Path::new(base_dir).join(inc);
                if path.exists() {
                    paths.push(path);
                } else if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        tracing::debug!(dir = %dir.display(), "scanning for catalogs");
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    tracing::warn!(error = %e, "cannot access path");
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if !path.is_file() || !has_catalog_extension(path) {
                continue;
            }

            if is_catalog_file(path) {
                files.insert(path_str.into_owned());
            } else {
                non_catalog_count += 1;
                tracing::debug!(path = %path.display(), "skipping non-catalog .ts file");
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
        non_catalog_count,
    }
}

fn has_catalog_extension(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("ts")
}

/// Reads up to the first element and checks for a `<TS>` root.
fn is_catalog_file(path: &Path) -> bool {
    match File::open(path) {
        Ok(file) => has_catalog_root(BufReader::new(file)),
        Err(_) => false,
    }
}
