//! run tool - execute a Python script inside the working root

use std::process::Stdio;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::tools::{Tool, ToolContext, ToolError, ToolResult};

/// Run a Python file with optional arguments, cwd pinned to the root
pub struct RunScriptTool;

#[async_trait]
impl Tool for RunScriptTool {
    fn name(&self) -> &'static str {
        "run"
    }

    fn description(&self) -> &'static str {
        "Run a Python file with optional arguments. Paths are relative to the working directory."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Python file path relative to the working directory"
                },
                "args": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Arguments passed to the script"
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
        let args: Vec<String> = input["args"]
            .as_array()
            .map(|a| a.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
            .unwrap_or_default();
        debug!(%path, ?args, "RunScriptTool::execute: called");

        let full_path = match ctx.confine(path, "execute") {
            Ok(p) => p,
            Err(e) => return ToolResult::from_error(e),
        };

        // Existence only; a directory passes here and fails at spawn
        if tokio::fs::metadata(&full_path).await.is_err() {
            return ToolResult::from_error(ToolError::ScriptNotFound {
                path: path.to_string(),
            });
        }

        if !path.ends_with(".py") {
            return ToolResult::from_error(ToolError::NotAPythonFile {
                path: path.to_string(),
            });
        }

        let mut cmd = tokio::process::Command::new("python3");
        cmd.arg(&full_path)
            .args(&args)
            .current_dir(ctx.root())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = match cmd.spawn() {
            Ok(c) => c,
            Err(e) => return ToolResult::from_error(ToolError::Spawn { source: e }),
        };

        // On expiry the output future is dropped and kill_on_drop
        // terminates the child; nothing is left running
        let output = match tokio::time::timeout(ctx.run_timeout, child.wait_with_output()).await {
            Ok(Ok(o)) => o,
            Ok(Err(e)) => return ToolResult::from_error(ToolError::Spawn { source: e }),
            Err(_) => {
                return ToolResult::from_error(ToolError::Timeout {
                    path: path.to_string(),
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("STDOUT:{stdout}\nSTDERR:{stderr}");

        let code = output.status.code().unwrap_or(-1);
        if code != 0 {
            return ToolResult::success(format!("{combined}\nProcess exited with code {code}"));
        }

        if stdout.is_empty() && stderr.is_empty() {
            return ToolResult::success("No output produced.");
        }

        ToolResult::success(combined)
    }
}
