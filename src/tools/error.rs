//! Tool error types

use thiserror::Error;

/// Errors that can occur during tool execution
///
/// Every variant is recovered locally by the capability that raised it
/// and rendered to an `Error: ...` string at the ToolResult boundary;
/// none of these ever crosses the dispatch loop as a panic.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Cannot {action} \"{path}\" as it is outside the permitted working directory")]
    OutOfScope { action: &'static str, path: String },

    #[error("File not found or is not a regular file: \"{path}\"")]
    NotAFile { path: String },

    #[error("\"{path}\" is not a directory")]
    NotADirectory { path: String },

    #[error("File \"{path}\" not found.")]
    ScriptNotFound { path: String },

    #[error("\"{path}\" is not a Python file.")]
    NotAPythonFile { path: String },

    #[error("Execution of \"{path}\" timed out.")]
    Timeout { path: String },

    #[error("executing Python file: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown function: {name}")]
    UnknownTool { name: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
