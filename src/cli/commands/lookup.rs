use std::path::Path;

use anyhow::{Context as _, Ok, Result};

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};
use crate::{
    config::load_config,
    core::{LookupOptions, Translator, parsers::ts::parse_catalog_file, substitute_args},
};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let catalog_dir = cmd
        .catalog
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let config = load_config(catalog_dir)?.config;

    let catalog = parse_catalog_file(&cmd.catalog)
        .with_context(|| format!("Failed to load catalog: {}", cmd.catalog.display()))?;

    let options = LookupOptions {
        include_unfinished: cmd.include_unfinished || config.include_unfinished,
    };
    let translator = Translator::from_catalog(&catalog, options);
    let comment = cmd.comment.as_deref();

    let found = translator
        .lookup(&cmd.context, &cmd.source, comment)
        .is_some();
    let text = match cmd.count {
        Some(n) => translator.translate_plural(&cmd.context, &cmd.source, comment, n),
        None => translator
            .translate(&cmd.context, &cmd.source, comment)
            .to_string(),
    };
    tracing::debug!(
        catalog = %cmd.catalog.display(),
        entries = translator.len(),
        found,
        "lookup"
    );

    let args: Vec<&str> = cmd.args.iter().map(String::as_str).collect();
    let text = substitute_args(&text, &args);

    Ok(finish(
        CommandSummary::Lookup(LookupSummary { text, found }),
        Vec::new(),
        1,
        false,
    ))
}
