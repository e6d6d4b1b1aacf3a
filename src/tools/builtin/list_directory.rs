//! list tool - list directory contents with sizes

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::tools::{Tool, ToolContext, ToolError, ToolResult};

/// List the immediate children of a directory
pub struct ListDirectoryTool;

#[async_trait]
impl Tool for ListDirectoryTool {
    fn name(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "List files and directories in a path, with file sizes. Paths are relative to the working directory."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Directory path relative to the working directory (default: .)"
                }
            }
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        let path = input["path"].as_str().unwrap_or(".");
        debug!(%path, "ListDirectoryTool::execute: called");

        let full_path = match ctx.confine(path, "list") {
            Ok(p) => p,
            Err(e) => return ToolResult::from_error(e),
        };

        // Existence and kind collapse into one check: a missing target
        // is "not a directory" just like a file target
        match tokio::fs::metadata(&full_path).await {
            Ok(meta) if meta.is_dir() => {}
            _ => {
                return ToolResult::from_error(ToolError::NotADirectory {
                    path: path.to_string(),
                });
            }
        }

        let mut dir = match tokio::fs::read_dir(&full_path).await {
            Ok(d) => d,
            Err(e) => return ToolResult::error(format!("Error: {e}")),
        };

        let mut lines = Vec::new();
        loop {
            match dir.next_entry().await {
                Ok(Some(entry)) => {
                    let name = entry.file_name().to_string_lossy().to_string();
                    let meta = match entry.metadata().await {
                        Ok(m) => m,
                        Err(e) => return ToolResult::error(format!("Error: {e}")),
                    };
                    lines.push(format!(
                        "- {}: file_size={} bytes, is_dir={}",
                        name,
                        meta.len(),
                        meta.is_dir()
                    ));
                }
                Ok(None) => break,
                Err(e) => return ToolResult::error(format!("Error: {e}")),
            }
        }

        // Directory enumeration order is OS-defined; impose lexical
        // order so output is stable across runs
        lines.sort();
        ToolResult::success(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_list_reports_size_and_dir_flag() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "12345").unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let result = ListDirectoryTool.execute(serde_json::json!({}), &ctx).await;

        assert!(!result.is_error);
        let lines: Vec<&str> = result.content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.contains(&"- a.txt: file_size=5 bytes, is_dir=false"));
        assert!(lines.iter().any(|l| l.starts_with("- b:") && l.ends_with("is_dir=true")));
    }

    #[tokio::test]
    async fn test_list_defaults_to_root() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("only.txt"), "x").unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let result = ListDirectoryTool.execute(serde_json::json!({}), &ctx).await;

        assert!(!result.is_error);
        assert!(result.content.contains("only.txt"));
    }

    #[tokio::test]
    async fn test_list_subdirectory() {
        let temp = tempdir().unwrap();
        let sub = temp.path().join("pkg");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("mod.py"), "pass").unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let result = ListDirectoryTool
            .execute(serde_json::json!({"path": "pkg"}), &ctx)
            .await;

        assert!(!result.is_error);
        assert!(result.content.contains("mod.py"));
    }

    #[tokio::test]
    async fn test_list_rejects_escape() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = ListDirectoryTool
            .execute(serde_json::json!({"path": "../.."}), &ctx)
            .await;

        assert!(result.is_error);
        assert!(
            result
                .content
                .contains("Cannot list \"../..\" as it is outside the permitted working directory")
        );
    }

    #[tokio::test]
    async fn test_list_file_target_is_not_a_directory() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("plain.txt"), "x").unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let result = ListDirectoryTool
            .execute(serde_json::json!({"path": "plain.txt"}), &ctx)
            .await;

        assert!(result.is_error);
        assert_eq!(result.content, "Error: \"plain.txt\" is not a directory");
    }

    #[tokio::test]
    async fn test_list_missing_target_is_not_a_directory() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = ListDirectoryTool
            .execute(serde_json::json!({"path": "ghost"}), &ctx)
            .await;

        assert!(result.is_error);
        assert!(result.content.contains("is not a directory"));
    }
}
