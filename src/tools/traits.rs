//! Tool trait definition

use async_trait::async_trait;
use serde_json::Value;

use super::context::ToolContext;

/// A tool that can be called by the LLM
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (matches LLM tool_use name)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> Value;

    /// Execute the tool
    ///
    /// Must never panic or propagate: all failures come back as an
    /// error-flagged [`ToolResult`] with `Error:`-prefixed content.
    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult;
}

/// Result of a tool execution
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// Create an error result
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }

    /// Render a tool error with the `Error:` marker the model expects
    pub fn from_error(err: super::ToolError) -> Self {
        Self::error(format!("Error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("File written successfully");
        assert!(!result.is_error);
        assert_eq!(result.content, "File written successfully");
    }

    #[test]
    fn test_tool_result_error() {
        let result = ToolResult::error("Error: File not found");
        assert!(result.is_error);
        assert_eq!(result.content, "Error: File not found");
    }

    #[test]
    fn test_from_error_prefixes_marker() {
        let result = ToolResult::from_error(crate::tools::ToolError::NotADirectory {
            path: "main.py".to_string(),
        });
        assert!(result.is_error);
        assert_eq!(result.content, "Error: \"main.py\" is not a directory");
    }
}
