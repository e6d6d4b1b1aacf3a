//! read tool - read file contents with a character cap

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::tools::{Tool, ToolContext, ToolError, ToolResult};

/// Read a file's contents, truncated at the configured character limit
pub struct ReadFileTool;

#[async_trait]
impl Tool for ReadFileTool {
    fn name(&self) -> &'static str {
        "read"
    }

    fn description(&self) -> &'static str {
        "Read a file's contents. Paths are relative to the working directory. Long files are truncated."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "File path relative to the working directory"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        let path = match input["path"].as_str() {
            Some(p) => p,
            None => return ToolResult::error("Error: path is required"),
        };
        debug!(%path, "ReadFileTool::execute: called");

        let full_path = match ctx.confine(path, "read") {
            Ok(p) => p,
            Err(e) => return ToolResult::from_error(e),
        };

        match tokio::fs::metadata(&full_path).await {
            Ok(meta) if meta.is_file() => {}
            _ => {
                return ToolResult::from_error(ToolError::NotAFile {
                    path: path.to_string(),
                });
            }
        }

        let content = match tokio::fs::read_to_string(&full_path).await {
            Ok(c) => c,
            Err(e) => return ToolResult::error(format!("Error: {e}")),
        };

        let max = ctx.max_read_chars;
        let mut chars = content.chars();
        let head: String = chars.by_ref().take(max).collect();

        if chars.next().is_some() {
            ToolResult::success(format!(
                "{head}[...File \"{path}\" truncated at {max} characters]"
            ))
        } else {
            ToolResult::success(content)
        }
    }
}
