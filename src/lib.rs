//! codeagent - sandboxed tool-calling coding agent
//!
//! A CLI agent that forwards a natural-language instruction to a
//! tool-capable LLM and executes the requested tool calls against a
//! single working directory. Every filesystem and process operation is
//! confined to that directory by lexical path validation before any I/O
//! is attempted.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and Anthropic implementation
//! - [`tools`] - Sandboxed tool system (list/read/write/run)
//! - [`agent`] - Bounded dispatch loop coordinating model and tools
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! # Trust boundary
//!
//! Containment is purely lexical: paths are normalized and checked
//! against the working root before use, with no symlink resolution.
//! A symlink created between check and use can defeat it. This is a
//! documented limitation, not an OS-level sandbox.

pub mod agent;
pub mod cli;
pub mod config;
pub mod llm;
pub mod tools;
