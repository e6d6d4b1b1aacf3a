//! ToolRegistry - name-to-capability dispatch
//!
//! Maps the fixed tool set {list, read, write, run} to implementations
//! and injects the process-wide working root into every call. The
//! model-issued arguments never choose the root: any root-like argument
//! the model supplies is stripped before dispatch.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::llm::{ToolCall, ToolDefinition};

use super::builtin::{ListDirectoryTool, ReadFileTool, RunScriptTool, WriteFileTool};
use super::{Tool, ToolContext, ToolResult};

/// Registry of the sandboxed capabilities exposed to the model
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create the registry with the standard capability set
    pub fn standard() -> Self {
        let mut tools: HashMap<String, Box<dyn Tool>> = HashMap::new();

        tools.insert("list".into(), Box::new(ListDirectoryTool));
        tools.insert("read".into(), Box::new(ReadFileTool));
        tools.insert("write".into(), Box::new(WriteFileTool));
        tools.insert("run".into(), Box::new(RunScriptTool));

        Self { tools }
    }

    /// Create an empty registry (for testing)
    pub fn empty() -> Self {
        Self { tools: HashMap::new() }
    }

    /// Add a tool to the registry
    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get tool definitions for the LLM
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect()
    }

    /// Dispatch a tool call, always producing a ToolResult
    pub async fn dispatch(&self, call: &ToolCall, ctx: &ToolContext) -> ToolResult {
        debug!(tool = %call.name, "dispatch: called");
        match self.tools.get(&call.name) {
            Some(tool) => tool.execute(strip_root_args(call.input.clone()), ctx).await,
            None => ToolResult::error(format!("Error: Unknown function: {}", call.name)),
        }
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Remove any argument that could override the injected working root
fn strip_root_args(mut input: Value) -> Value {
    if let Some(obj) = input.as_object_mut() {
        obj.remove("working_directory");
        obj.remove("working_dir");
        obj.remove("root");
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_standard_registry_has_all_capabilities() {
        let registry = ToolRegistry::standard();

        assert!(registry.has_tool("list"));
        assert!(registry.has_tool("read"));
        assert!(registry.has_tool("write"));
        assert!(registry.has_tool("run"));
        assert_eq!(registry.tool_names().len(), 4);
    }

    #[test]
    fn test_definitions_cover_all_tools() {
        let registry = ToolRegistry::standard();
        let defs = registry.definitions();

        assert_eq!(defs.len(), 4);
        assert!(defs.iter().any(|d| d.name == "run"));
        assert!(defs.iter().all(|d| d.input_schema.is_object()));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let registry = ToolRegistry::standard();
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let call = ToolCall {
            id: "call_1".to_string(),
            name: "delete_everything".to_string(),
            input: serde_json::json!({}),
        };

        let result = registry.dispatch(&call, &ctx).await;
        assert!(result.is_error);
        assert!(result.content.contains("Unknown function: delete_everything"));
    }

    #[tokio::test]
    async fn test_dispatch_strips_root_override() {
        let registry = ToolRegistry::standard();
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("safe.txt"), "inside").unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        // A malicious root argument must not redirect the read
        let call = ToolCall {
            id: "call_1".to_string(),
            name: "read".to_string(),
            input: serde_json::json!({
                "path": "safe.txt",
                "working_directory": "/etc",
            }),
        };

        let result = registry.dispatch(&call, &ctx).await;
        assert!(!result.is_error);
        assert_eq!(result.content, "inside");
    }

    #[test]
    fn test_strip_root_args_non_object_passthrough() {
        let input = serde_json::json!("not an object");
        assert_eq!(strip_root_args(input.clone()), input);
    }
}
