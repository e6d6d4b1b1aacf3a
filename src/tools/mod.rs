//! Sandboxed tool system
//!
//! Tools give the model file system access and script execution scoped
//! to one working root. Every path argument goes through the lexical
//! confinement check in [`sandbox`] before any I/O; failures of any
//! kind are returned to the model as `Error:` text, never raised.

mod context;
mod error;
mod registry;
pub mod sandbox;
mod traits;

pub mod builtin;

pub use context::{DEFAULT_MAX_READ_CHARS, DEFAULT_RUN_TIMEOUT, ToolContext};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolResult};
