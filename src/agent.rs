//! Agent - the bounded dispatch loop
//!
//! Seeds the conversation with the user's instruction, then alternates
//! between model calls and tool dispatch until the model produces plain
//! text, the iteration budget runs out, or the model returns neither.
//! Tool failures come back as text and feed the next round; only a
//! broken collaborator reply terminates the run with an error.

use std::sync::Arc;

use eyre::Result;
use tracing::{debug, info, warn};

use crate::llm::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmClient, Message, TokenUsage, ToolCall, ToolDefinition,
};
use crate::tools::{ToolContext, ToolRegistry};

/// System instruction establishing the agent persona and path rules
pub const SYSTEM_PROMPT: &str = "\
You are a helpful AI coding agent.

When a user asks a question or makes a request, make a function call plan. You can perform the following operations:

- List files and directories.
- Read file contents.
- Write to a file or overwrite a file.
- Run/Execute a Python file with optional arguments.

All paths you provide should be relative to the working directory. You do not need to specify the working directory in your function calls as it is automatically injected for security reasons.
";

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutcome {
    /// The model produced a final text answer
    FinalText(String),

    /// The iteration budget ran out while the model kept calling tools
    BudgetExhausted,

    /// The model returned neither a tool call nor text
    NoResponse,
}

/// Result of a completed run
#[derive(Debug)]
pub struct RunReport {
    pub outcome: AgentOutcome,
    pub iterations: u32,
    pub usage: TokenUsage,
}

/// The dispatch loop driving model and tools
pub struct Agent {
    llm: Arc<dyn LlmClient>,
    registry: ToolRegistry,
    ctx: ToolContext,
    max_iterations: u32,
    max_tokens: u32,
    verbose: bool,
}

impl Agent {
    /// Create an agent with the standard tool registry
    pub fn new(llm: Arc<dyn LlmClient>, ctx: ToolContext, max_iterations: u32, max_tokens: u32) -> Self {
        Self {
            llm,
            registry: ToolRegistry::standard(),
            ctx,
            max_iterations,
            max_tokens,
            verbose: false,
        }
    }

    /// Enable verbose tool-call echoing
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Replace the registry (for testing)
    #[cfg(test)]
    pub fn with_registry(mut self, registry: ToolRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Run the loop on one instruction until a terminal outcome
    pub async fn run(&self, instruction: &str) -> Result<RunReport> {
        info!(root = %self.ctx.root.display(), max_iterations = self.max_iterations, "starting run");

        let tool_defs: Vec<ToolDefinition> = self.registry.definitions();
        let mut messages = vec![Message::user(instruction)];
        let mut usage = TokenUsage::default();

        for iteration in 1..=self.max_iterations {
            debug!(iteration, "dispatch round");

            let request = CompletionRequest {
                system_prompt: SYSTEM_PROMPT.to_string(),
                messages: messages.clone(),
                tools: tool_defs.clone(),
                max_tokens: self.max_tokens,
            };

            // The one fatal path: a malformed or undeliverable reply
            let response = self.llm.complete(request).await?;
            usage.add(&response.usage);

            if let Some(call) = response.tool_calls.first() {
                // Only the first requested call is honored per round;
                // later calls in the same response are dropped from the
                // conversation so every tool_use has a matching result
                if self.verbose {
                    println!("Calling function: {}({})", call.name, call.input);
                } else {
                    println!(" - Calling function: {}", call.name);
                }

                messages.push(assistant_turn(&response, call));

                let result = self.registry.dispatch(call, &self.ctx).await;
                info!(tool = %call.name, is_error = result.is_error, "tool dispatched");
                if self.verbose {
                    println!("-> {}", result.content);
                }

                messages.push(Message::user_blocks(vec![ContentBlock::tool_result(
                    &call.id,
                    &result.content,
                    result.is_error,
                )]));
                continue;
            }

            if let Some(text) = response.content {
                info!(iteration, "final response received");
                return Ok(RunReport {
                    outcome: AgentOutcome::FinalText(text),
                    iterations: iteration,
                    usage,
                });
            }

            warn!(iteration, "no function call or text response received");
            return Ok(RunReport {
                outcome: AgentOutcome::NoResponse,
                iterations: iteration,
                usage,
            });
        }

        info!(max_iterations = self.max_iterations, "iteration budget exhausted");
        Ok(RunReport {
            outcome: AgentOutcome::BudgetExhausted,
            iterations: self.max_iterations,
            usage,
        })
    }
}

/// Assistant message carrying the model's text and the honored tool call
fn assistant_turn(response: &CompletionResponse, call: &ToolCall) -> Message {
    let mut blocks = Vec::new();

    if let Some(text) = &response.content {
        blocks.push(ContentBlock::text(text));
    }

    blocks.push(ContentBlock::ToolUse {
        id: call.id.clone(),
        name: call.name.clone(),
        input: call.input.clone(),
    });

    Message::assistant_blocks(blocks)
}
