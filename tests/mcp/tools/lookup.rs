use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{TscatMcpServer, types::LookupMessageParams};

use crate::{McpTestFixture, extract_tool_result_json, fixture_with_issues};

fn lookup_params(fixture: &McpTestFixture, source: &str) -> LookupMessageParams {
    LookupMessageParams {
        project_root_path: fixture.root(),
        catalog: "translations/Mesh_it.ts".to_string(),
        context: "CmdMeshUnion".to_string(),
        source: source.to_string(),
        comment: None,
        count: None,
        args: None,
        include_unfinished: None,
    }
}

#[tokio::test]
async fn test_lookup_message_found() {
    let fixture = fixture_with_issues().unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .lookup_message(Parameters(lookup_params(&fixture, "Union of meshes")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Unione di mesh");
    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["language"], "it");
}

#[tokio::test]
async fn test_lookup_message_fallback() {
    let fixture = fixture_with_issues().unwrap();
    let server = TscatMcpServer::new();

    for source in ["Old text", "Pending", "Unknown"] {
        let result = server
            .lookup_message(Parameters(lookup_params(&fixture, source)))
            .await
            .unwrap();
        let json_result = extract_tool_result_json(&result);

        assert_eq!(json_result["text"], source);
        assert_eq!(json_result["found"], false);
    }
}

#[tokio::test]
async fn test_lookup_message_with_args() {
    let fixture = fixture_with_issues().unwrap();
    let server = TscatMcpServer::new();

    let mut params = lookup_params(&fixture, "Mesh %1 has %2 faces");
    params.args = Some(vec!["Cube".to_string(), "6".to_string()]);

    let result = server.lookup_message(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "La mesh Cube ha facce");
}

#[tokio::test]
async fn test_lookup_message_disambiguation_and_plural() {
    let fixture = McpTestFixture::with_catalogs(vec![(
        "it",
        r#"<context>
    <name>CmdMeshUnion</name>
    <message>
        <source>Open</source>
        <comment>verb</comment>
        <translation>Apri</translation>
    </message>
    <message>
        <source>Open</source>
        <translation>Aperto</translation>
    </message>
    <message numerus="yes">
        <source>%n mesh(es)</source>
        <translation>
            <numerusform>%n mesh</numerusform>
            <numerusform>%n mesh multiple</numerusform>
        </translation>
    </message>
</context>
"#,
    )])
    .unwrap();
    let server = TscatMcpServer::new();

    let mut params = lookup_params(&fixture, "Open");
    params.comment = Some("verb".to_string());
    let result = server.lookup_message(Parameters(params)).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["text"], "Apri");

    // Unknown comment retries without it
    let mut params = lookup_params(&fixture, "Open");
    params.comment = Some("adjective".to_string());
    let result = server.lookup_message(Parameters(params)).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["text"], "Aperto");

    let mut params = lookup_params(&fixture, "%n mesh(es)");
    params.count = Some(4);
    let result = server.lookup_message(Parameters(params)).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["text"], "4 mesh multiple");
}

#[tokio::test]
async fn test_lookup_message_respects_config() {
    let fixture = McpTestFixture::with_catalogs(vec![(
        "it",
        r#"<context>
    <name>CmdMeshUnion</name>
    <message>
        <source>Pending</source>
        <translation type="unfinished">In attesa</translation>
    </message>
</context>
"#,
    )])
    .unwrap();
    fixture
        .write_config(&json!({ "includeUnfinished": true }))
        .unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .lookup_message(Parameters(lookup_params(&fixture, "Pending")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["text"], "In attesa");
    assert_eq!(json_result["found"], true);

    let mut params = lookup_params(&fixture, "Pending");
    params.include_unfinished = Some(false);
    let result = server.lookup_message(Parameters(params)).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["text"], "Pending");
}

#[tokio::test]
async fn test_lookup_message_missing_catalog() {
    let fixture = McpTestFixture::new().unwrap();
    assert!(fixture.root_path().join("translations").is_dir());
    let server = TscatMcpServer::new();

    let result = server
        .lookup_message(Parameters(lookup_params(&fixture, "Union of meshes")))
        .await;
    assert!(result.is_err());
}
