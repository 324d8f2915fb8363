use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::CommonArgs,
    config::load_config,
    core::{
        CatalogStats, CheckContext, LookupOptions, Translator, parsers::ts::parse_catalog_file,
        substitute_args,
    },
    issues::{Issue, Rule, Severity},
    rules::run_rules,
};

use super::types::{
    CatalogInfo, CatalogStatsItem, CatalogStatsParams, CatalogsResult, ConfigDto, ConfigValues,
    GetConfigParams, IssueItem, IssuesScanResult, ListCatalogsParams, LookupMessageParams,
    LookupResult, Pagination, ParseErrorItem, RuleCount, ScanIssuesParams, ScanOverviewParams,
    ScanOverviewResult, StatsResult,
};

const DEFAULT_PAGE_SIZE: usize = 20;
const MAX_PAGE_SIZE: usize = 100;

#[derive(Clone)]
pub struct TscatMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TscatMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TscatMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tscat configuration
    #[tool(description = "Get the tscat configuration (.tscatrc.json) in effect for a project.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List catalogs found under the project root
    #[tool(
        description = "List Qt Linguist .ts catalogs under the project root with their languages and message counts. Catalogs that fail to parse are listed separately."
    )]
    pub async fn list_catalogs(
        &self,
        params: Parameters<ListCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = build_context(&params.0.project_root_path, None)?;

        let catalogs = ctx
            .catalogs
            .iter()
            .map(|file| CatalogInfo {
                file_path: file.path().to_string(),
                language: file.catalog.language.clone(),
                source_language: ctx.source_language(file).to_string(),
                context_count: file.catalog.contexts.len(),
                message_count: file.catalog.messages().count(),
            })
            .collect();
        let parse_errors = ctx
            .parse_errors()
            .iter()
            .map(|e| ParseErrorItem {
                file_path: e.file_path.clone(),
                line: e.line,
                error: e.error.clone(),
            })
            .collect();

        to_tool_result(&CatalogsResult {
            catalogs,
            parse_errors,
        })
    }

    /// Get issue counts per rule
    #[tool(
        description = "Get issue counts per rule across all catalogs without detailed items. Use this first to understand the overall state before calling scan_issues."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = build_context(&params.0.project_root_path, None)?;
        let issues = collect_issues(&ctx, &Rule::all());

        let mut per_rule: BTreeMap<Rule, (usize, HashSet<&str>)> = BTreeMap::new();
        for issue in &issues {
            let entry = per_rule.entry(issue.rule()).or_default();
            entry.0 += 1;
            entry.1.insert(issue_file_path(issue));
        }

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        let rules = per_rule
            .into_iter()
            .map(|(rule, (count, files))| RuleCount {
                rule: rule.to_string(),
                severity: rule.severity().to_string(),
                count,
                file_count: files.len(),
            })
            .collect();

        to_tool_result(&ScanOverviewResult {
            catalog_count: ctx.files_checked(),
            total_count: issues.len(),
            error_count,
            warning_count: issues.len() - error_count,
            rules,
        })
    }

    /// Get detailed issues, optionally for one rule
    #[tool(
        description = "Get detailed catalog issues (paginated). Filter with `rule`: empty-source, conflicting-translation, placeholder-mismatch, unfinished, obsolete, untranslated, accelerator-mismatch, parse-error."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let selected = match params.rule.as_deref() {
            Some(name) => Some(parse_rule(name)?),
            None => None,
        };

        let ctx = build_context(&params.project_root_path, params.language)?;
        let rules = match selected {
            Some(Rule::ParseError) => Vec::new(),
            Some(rule) => vec![rule],
            None => Rule::all(),
        };
        let mut issues: Vec<Issue> = run_rules(&ctx, &rules);
        if matches!(selected, None | Some(Rule::ParseError)) {
            issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));
        }
        issues.sort();

        let total_count = issues.len();
        let items: Vec<IssueItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(IssueItem::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        to_tool_result(&IssuesScanResult {
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Get translation progress per catalog
    #[tool(
        description = "Get translation progress per catalog: finished, unfinished and obsolete message counts and completion percentage."
    )]
    pub async fn catalog_stats(
        &self,
        params: Parameters<CatalogStatsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = build_context(&params.0.project_root_path, params.0.language)?;

        let catalogs = ctx
            .catalogs
            .iter()
            .map(|file| CatalogStatsItem::from(&CatalogStats::from_catalog(&file.catalog)))
            .collect();

        to_tool_result(&StatsResult { catalogs })
    }

    /// Look up the translation of one message
    #[tool(
        description = "Look up the translation of a message by context, source text and optional disambiguation comment. Falls back to the source text when no usable translation exists."
    )]
    pub async fn lookup_message(
        &self,
        params: Parameters<LookupMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = Path::new(&params.project_root_path);

        let config = load_config(root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
            .config;

        let catalog_path = root.join(&params.catalog);
        let catalog = parse_catalog_file(&catalog_path).map_err(|e| {
            McpError::invalid_params(
                format!("Failed to load catalog {}: {}", params.catalog, e),
                None,
            )
        })?;

        let options = LookupOptions {
            include_unfinished: params
                .include_unfinished
                .unwrap_or(config.include_unfinished),
        };
        let translator = Translator::from_catalog(&catalog, options);
        let comment = params.comment.as_deref();

        let found = translator
            .lookup(&params.context, &params.source, comment)
            .is_some();
        let text = match params.count {
            Some(n) => translator.translate_plural(&params.context, &params.source, comment, n),
            None => translator
                .translate(&params.context, &params.source, comment)
                .to_string(),
        };
        let args: Vec<&str> = params
            .args
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();

        to_tool_result(&LookupResult {
            text: substitute_args(&text, &args),
            found,
            language: translator.language().map(str::to_string),
        })
    }
}

#[tool_handler]
impl ServerHandler for TscatMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tscat MCP helps AI agents maintain Qt Linguist (.ts) translation catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. list_catalogs - List catalogs with languages and message counts\n\
                 3. catalog_stats - Get translation progress per catalog\n\
                 4. scan_overview - Get issue counts per rule\n\
                 5. scan_issues - Get detailed issues, optionally for one rule (paginated)\n\
                 6. lookup_message - Look up the translation of one message\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix errors first (empty-source, conflicting-translation, placeholder-mismatch)\n\
                 3. Then work through unfinished and untranslated messages\n\
                 4. Verify individual messages with lookup_message"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            tracing::debug!("starting MCP server on stdio");
            let service = TscatMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

fn build_context(path: &str, language: Option<String>) -> Result<CheckContext, McpError> {
    let args = CommonArgs {
        path: Some(PathBuf::from(path)),
        language: language.into_iter().collect(),
        verbose: false,
    };
    CheckContext::new(&args)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

fn collect_issues(ctx: &CheckContext, rules: &[Rule]) -> Vec<Issue> {
    let mut issues = run_rules(ctx, rules);
    issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));
    issues
}

fn issue_file_path(issue: &Issue) -> &str {
    match issue {
        Issue::ParseError(e) => &e.file_path,
        Issue::EmptySource(i) => i.context.file_path(),
        Issue::ConflictingTranslation(i) => i.context.file_path(),
        Issue::PlaceholderMismatch(i) => i.context.file_path(),
        Issue::Unfinished(i) => i.context.file_path(),
        Issue::Obsolete(i) => i.context.file_path(),
        Issue::Untranslated(i) => i.context.file_path(),
        Issue::AcceleratorMismatch(i) => i.context.file_path(),
    }
}

fn parse_rule(name: &str) -> Result<Rule, McpError> {
    if name == Rule::ParseError.to_string() {
        return Ok(Rule::ParseError);
    }
    Rule::from_str(name, true)
        .map_err(|_| McpError::invalid_params(format!("Unknown rule: {}", name), None))
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("JSON serialization failed: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}
