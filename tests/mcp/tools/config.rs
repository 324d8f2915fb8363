use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{
    TscatMcpServer,
    types::{GetConfigParams, ListCatalogsParams},
};

use crate::{McpTestFixture, UNION_CONTEXT, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["sourceLanguage"], "en");
    assert_eq!(json_result["config"]["includeUnfinished"], false);
    assert!(json_result["config"]["includes"].is_array());
}

#[tokio::test]
async fn test_get_config_from_tscatrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "ignoreTexts": ["OK"],
            "sourceLanguage": "de"
        }))
        .unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["sourceLanguage"], "de");
    assert_eq!(json_result["config"]["ignoreTexts"], json!(["OK"]));
}

#[tokio::test]
async fn test_get_config_invalid_glob_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "ignores": ["**/[broken*"] }))
        .unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}

// ============================================================================
// list_catalogs tests
// ============================================================================

#[tokio::test]
async fn test_list_catalogs() {
    let fixture = McpTestFixture::with_catalogs(vec![("it", UNION_CONTEXT)]).unwrap();
    fixture
        .write_file(
            "translations/Mesh_ja.ts",
            "<TS version=\"2.1\" language=\"ja\">\n<context>\n</TS>\n",
        )
        .unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ListCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.list_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 1);
    assert!(
        catalogs[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("translations/Mesh_it.ts")
    );
    assert_eq!(catalogs[0]["language"], "it");
    assert_eq!(catalogs[0]["sourceLanguage"], "en");
    assert_eq!(catalogs[0]["contextCount"], 1);
    assert_eq!(catalogs[0]["messageCount"], 4);

    let parse_errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(parse_errors.len(), 1);
    assert!(
        parse_errors[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("Mesh_ja.ts")
    );
}
