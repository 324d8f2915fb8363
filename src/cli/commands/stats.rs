use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{CommandResult, CommandSummary, StatsSummary, helper::finish};
use crate::{
    core::{CatalogStats, CheckContext},
    issues::Issue,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let catalogs = ctx
        .catalogs
        .iter()
        .map(|file| CatalogStats::from_catalog(&file.catalog))
        .collect();

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary {
            format: cmd.format,
            catalogs,
        }),
        issues,
        ctx.files_checked(),
        false,
    ))
}
