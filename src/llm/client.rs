//! LlmClient trait - the model collaborator seam
//!
//! The dispatch loop only depends on this trait; tests substitute stub
//! clients to exercise loop termination without network access.

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// A client capable of one blocking completion round-trip
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send the conversation and tool schemas, get one response
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
