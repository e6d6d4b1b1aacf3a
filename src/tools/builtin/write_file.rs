//! write tool - write content to a file, creating parents as needed

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::tools::{Tool, ToolContext, ToolResult};

/// Write (overwrite) a file wholesale
pub struct WriteFileTool;

#[async_trait]
impl Tool for WriteFileTool {
    fn name(&self) -> &'static str {
        "write"
    }

    fn description(&self) -> &'static str {
        "Write content to a file, overwriting it. Creates parent directories if needed. Paths are relative to the working directory."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "File path relative to the working directory"
                },
                "content": {
                    "type": "string",
                    "description": "Content to write"
                }
            },
            "required": ["path", "content"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        let path = match input["path"].as_str() {
            Some(p) => p,
            None => return ToolResult::error("Error: path is required"),
        };
        let content = match input["content"].as_str() {
            Some(c) => c,
            None => return ToolResult::error("Error: content is required"),
        };
        debug!(%path, content_len = content.len(), "WriteFileTool::execute: called");

        let full_path = match ctx.confine(path, "write to") {
            Ok(p) => p,
            Err(e) => return ToolResult::from_error(e),
        };

        // create_dir_all is idempotent, so an existing chain is fine
        if let Some(parent) = full_path.parent()
            && let Err(e) = tokio::fs::create_dir_all(parent).await
        {
            return ToolResult::error(format!("Error: {e}"));
        }

        if let Err(e) = tokio::fs::write(&full_path, content).await {
            return ToolResult::error(format!("Error: {e}"));
        }

        ToolResult::success(format!(
            "Successfully wrote to \"{path}\" ({} characters written)",
            content.chars().count()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_reports_character_count() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = WriteFileTool
            .execute(serde_json::json!({"path": "out.txt", "content": "Hello, world!"}), &ctx)
            .await;

        assert!(!result.is_error);
        assert_eq!(
            result.content,
            "Successfully wrote to \"out.txt\" (13 characters written)"
        );
        assert_eq!(fs::read_to_string(temp.path().join("out.txt")).unwrap(), "Hello, world!");
    }

    #[tokio::test]
    async fn test_write_creates_missing_parents() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = WriteFileTool
            .execute(
                serde_json::json!({"path": "a/b/c/deep.txt", "content": "nested"}),
                &ctx,
            )
            .await;

        assert!(!result.is_error);
        assert_eq!(
            fs::read_to_string(temp.path().join("a/b/c/deep.txt")).unwrap(),
            "nested"
        );
    }

    #[tokio::test]
    async fn test_write_overwrites_wholesale() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("f.txt"), "old content that is longer").unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = WriteFileTool
            .execute(serde_json::json!({"path": "f.txt", "content": "new"}), &ctx)
            .await;

        assert!(!result.is_error);
        assert_eq!(fs::read_to_string(temp.path().join("f.txt")).unwrap(), "new");
    }

    #[tokio::test]
    async fn test_write_rejects_escape() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = WriteFileTool
            .execute(
                serde_json::json!({"path": "../evil.txt", "content": "nope"}),
                &ctx,
            )
            .await;

        assert!(result.is_error);
        assert!(
            result
                .content
                .contains("Cannot write to \"../evil.txt\" as it is outside the permitted working directory")
        );
        assert!(!temp.path().parent().unwrap().join("evil.txt").exists());
    }

    #[tokio::test]
    async fn test_write_counts_characters_not_bytes() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = WriteFileTool
            .execute(serde_json::json!({"path": "uni.txt", "content": "αβγ"}), &ctx)
            .await;

        assert!(!result.is_error);
        assert!(result.content.contains("(3 characters written)"));
    }

    #[tokio::test]
    async fn test_write_missing_content_argument() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = WriteFileTool
            .execute(serde_json::json!({"path": "f.txt"}), &ctx)
            .await;

        assert!(result.is_error);
        assert!(result.content.contains("content is required"));
    }
}
