use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    core::CheckContext,
    issues::{Issue, Rule},
    rules::run_rules,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let rules = if cmd.rules.is_empty() {
        Rule::all()
    } else {
        cmd.rules.clone()
    };

    let mut all_issues: Vec<Issue> = run_rules(&ctx, &rules);
    all_issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.files_checked(),
        true,
    ))
}
