use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a translations/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join(".git"))?;
        fs::create_dir_all(project_root.join("translations"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with one catalog per `(language, contexts)` pair
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_catalogs(vec![
    ///     ("it", "<context>...</context>"),
    /// ])?;
    /// ```
    pub fn with_catalogs(catalogs: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (language, contexts) in catalogs {
            fixture.write_catalog(language, contexts)?;
        }
        Ok(fixture)
    }

    /// Write translations/Mesh_<language>.ts wrapping the given contexts
    pub fn write_catalog(&self, language: &str, contexts: &str) -> Result<()> {
        let content = format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"{}\" sourcelanguage=\"en\">\n{}</TS>\n",
            language, contexts
        );
        self.write_file(&format!("translations/Mesh_{}.ts", language), &content)
    }

    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .tscatrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".tscatrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

pub const UNION_CONTEXT: &str = r#"<context>
    <name>CmdMeshUnion</name>
    <message>
        <source>Union of meshes</source>
        <translation>Unione di mesh</translation>
    </message>
    <message>
        <source>Mesh %1 has %2 faces</source>
        <translation>La mesh %1 ha facce</translation>
    </message>
    <message>
        <source>Pending</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Old text</source>
        <translation type="obsolete">Testo vecchio</translation>
    </message>
</context>
"#;

/// One Italian catalog with a placeholder error, an unfinished and an obsolete message
pub fn fixture_with_issues() -> Result<McpTestFixture> {
    McpTestFixture::with_catalogs(vec![("it", UNION_CONTEXT)])
}

/// A catalog with `count` unfinished messages
pub fn fixture_with_unfinished(count: usize) -> Result<McpTestFixture> {
    let messages: String = (0..count)
        .map(|i| {
            format!(
                "    <message>\n        <source>Message {}</source>\n        <translation type=\"unfinished\"></translation>\n    </message>\n",
                i
            )
        })
        .collect();
    let contexts = format!("<context>\n    <name>Bulk</name>\n{}</context>\n", messages);
    McpTestFixture::with_catalogs(vec![("fr", &contexts)])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
