//! ToolContext - execution context for tools
//!
//! One context is built at startup and shared by every capability call.
//! It owns the working root plus the limits the capabilities enforce;
//! nothing in it is mutated after construction, so tools stay pure
//! functions of their arguments.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{ToolError, sandbox};

/// Default cap on characters returned by the read tool
pub const DEFAULT_MAX_READ_CHARS: usize = 10_000;

/// Default wall-clock limit for the run tool
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(30);

/// Execution context for tools - scoped to one working root
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Working root - all capability operations confined here
    pub root: PathBuf,

    /// Maximum characters the read tool returns before truncating
    pub max_read_chars: usize,

    /// Hard wall-clock limit for the run tool's child process
    pub run_timeout: Duration,
}

impl ToolContext {
    /// Create a context with default limits
    ///
    /// The root is made absolute and lexically normalized once, here;
    /// everything downstream compares against this exact form.
    pub fn new(root: PathBuf) -> Self {
        Self::with_limits(root, DEFAULT_MAX_READ_CHARS, DEFAULT_RUN_TIMEOUT)
    }

    /// Create a context with explicit limits
    pub fn with_limits(root: PathBuf, max_read_chars: usize, run_timeout: Duration) -> Self {
        let absolute = std::path::absolute(&root).unwrap_or(root);
        Self {
            root: sandbox::normalize(&absolute),
            max_read_chars,
            run_timeout,
        }
    }

    /// Resolve a relative path against the root, rejecting escapes
    pub fn confine(&self, relative: &str, action: &'static str) -> Result<PathBuf, ToolError> {
        sandbox::confine(&self.root, relative, action)
    }

    /// Root as a `&Path` for subprocess `current_dir` and joins
    pub fn root(&self) -> &Path {
        &self.root
    }
}
