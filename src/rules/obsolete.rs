use crate::{
    core::{CatalogFile, CheckContext},
    issues::ObsoleteIssue,
};

pub fn check_obsolete_issues(ctx: &CheckContext) -> Vec<ObsoleteIssue> {
    ctx.catalogs.iter().flat_map(check_obsolete).collect()
}

/// Messages marked `obsolete` or `vanished`.
pub fn check_obsolete(file: &CatalogFile) -> Vec<ObsoleteIssue> {
    file.catalog
        .messages()
        .filter(|(_, message)| message.is_stale())
        .map(|(context, message)| ObsoleteIssue {
            context: file.entry(context, message),
            status: message.status,
        })
        .collect()
}
