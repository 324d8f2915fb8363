use rmcp::handler::server::wrapper::Parameters;
use tscat::mcp::{TscatMcpServer, types::CatalogStatsParams};

use crate::{McpTestFixture, UNION_CONTEXT, extract_tool_result_json};

const DE_CONTEXT: &str = r#"<context>
    <name>CmdMeshUnion</name>
    <message>
        <source>Union of meshes</source>
        <translation>Vereinigung von Netzen</translation>
    </message>
</context>
"#;

#[tokio::test]
async fn test_catalog_stats() {
    let fixture =
        McpTestFixture::with_catalogs(vec![("it", UNION_CONTEXT), ("de", DE_CONTEXT)]).unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(CatalogStatsParams {
        project_root_path: fixture.root(),
        language: None,
    });

    let result = server.catalog_stats(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 2);

    // Sorted by path: Mesh_de before Mesh_it
    assert_eq!(catalogs[0]["language"], "de");
    assert_eq!(catalogs[0]["completion"], 100.0);

    assert_eq!(catalogs[1]["language"], "it");
    assert_eq!(catalogs[1]["messages"], 4);
    assert_eq!(catalogs[1]["finished"], 2);
    assert_eq!(catalogs[1]["unfinished"], 1);
    assert_eq!(catalogs[1]["obsolete"], 1);
    assert_eq!(catalogs[1]["completion"], 66.7);
}

#[tokio::test]
async fn test_catalog_stats_language_filter() {
    let fixture =
        McpTestFixture::with_catalogs(vec![("it", UNION_CONTEXT), ("de", DE_CONTEXT)]).unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(CatalogStatsParams {
        project_root_path: fixture.root(),
        language: Some("it".to_string()),
    });

    let result = server.catalog_stats(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 1);
    assert_eq!(catalogs[0]["language"], "it");
}
