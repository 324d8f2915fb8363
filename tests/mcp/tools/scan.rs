use rmcp::handler::server::wrapper::Parameters;
use tscat::mcp::{
    TscatMcpServer,
    types::{ScanIssuesParams, ScanOverviewParams},
};

use crate::{
    McpTestFixture, assert_pagination, extract_tool_result_json, fixture_with_issues,
    fixture_with_unfinished,
};

fn scan_params(fixture: &McpTestFixture, rule: Option<&str>) -> ScanIssuesParams {
    ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: rule.map(str::to_string),
        language: None,
        limit: None,
        offset: None,
    }
}

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview_counts_per_rule() {
    let fixture = fixture_with_issues().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogCount"], 1);
    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["errorCount"], 1);
    assert_eq!(json_result["warningCount"], 2);

    let rules: Vec<&str> = json_result["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["rule"].as_str().unwrap())
        .collect();
    assert_eq!(rules, vec!["placeholder-mismatch", "unfinished", "obsolete"]);
    assert_eq!(json_result["rules"][0]["severity"], "error");
    assert_eq!(json_result["rules"][0]["fileCount"], 1);
}

#[tokio::test]
async fn test_scan_overview_empty_project() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogCount"], 0);
    assert_eq!(json_result["totalCount"], 0);
    assert!(json_result["rules"].as_array().unwrap().is_empty());
}

// ============================================================================
// scan_issues tests
// ============================================================================

#[tokio::test]
async fn test_scan_issues_all_rules() {
    let fixture = fixture_with_issues().unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .scan_issues(Parameters(scan_params(&fixture, None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_pagination(&json_result, 0, 20, false);

    // Sorted by line
    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items[0]["rule"], "placeholder-mismatch");
    assert_eq!(items[0]["message"], "Mesh %1 has %2 faces");
    assert_eq!(items[0]["context"], "CmdMeshUnion");
    assert!(items[0]["details"].as_str().unwrap().contains("%2"));
    assert_eq!(items[1]["rule"], "unfinished");
    assert_eq!(items[2]["rule"], "obsolete");
    assert!(items[2]["hint"].is_string());
}

#[tokio::test]
async fn test_scan_issues_rule_filter() {
    let fixture = fixture_with_issues().unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .scan_issues(Parameters(scan_params(&fixture, Some("obsolete"))))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["message"], "Old text");
    assert_eq!(json_result["items"][0]["severity"], "warning");
}

#[tokio::test]
async fn test_scan_issues_parse_error_filter() {
    let fixture = fixture_with_issues().unwrap();
    fixture
        .write_file(
            "translations/Broken_ja.ts",
            "<TS version=\"2.1\" language=\"ja\">\n<context>\n</TS>\n",
        )
        .unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .scan_issues(Parameters(scan_params(&fixture, Some("parse-error"))))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    let item = &json_result["items"][0];
    assert_eq!(item["rule"], "parse-error");
    assert!(item.get("context").is_none());
}

#[tokio::test]
async fn test_scan_issues_unknown_rule() {
    let fixture = fixture_with_issues().unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .scan_issues(Parameters(scan_params(&fixture, Some("misspelled-glossary"))))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_scan_issues_pagination() {
    let fixture = fixture_with_unfinished(25).unwrap();
    let server = TscatMcpServer::new();

    let mut params = scan_params(&fixture, Some("unfinished"));
    params.limit = Some(10);
    params.offset = Some(20);

    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 25);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 5);
    assert_pagination(&json_result, 20, 10, false);

    let mut params = scan_params(&fixture, Some("unfinished"));
    params.limit = Some(10);
    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_pagination(&json_result, 0, 10, true);
}

#[tokio::test]
async fn test_scan_issues_limit_capped() {
    let fixture = fixture_with_unfinished(3).unwrap();
    let server = TscatMcpServer::new();

    let mut params = scan_params(&fixture, None);
    params.limit = Some(500);

    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
}
