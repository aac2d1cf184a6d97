//! Agent runner: tool calling loop with handoff routing.

use super::definition::Agent;
use super::tools::{handoff_target, parse_tool_call, tool_definitions, ToolContext};
use crate::error::{Result, SvarError};
use async_openai::types::{
    ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use std::sync::Arc;
use tracing::{debug, info, Instrument};
use uuid::Uuid;

/// Default maximum turns (LLM calls) per run.
const DEFAULT_MAX_TURNS: usize = 10;

/// Drives a query through an agent graph.
///
/// The runner submits the conversation to the model on behalf of the active
/// agent, executes any function tools the model calls, and follows transfer
/// tools by making the target agent active. Which branch to take is entirely
/// the model's decision; the runner only interprets the declared graph.
pub struct Runner {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    default_model: String,
    tools: ToolContext,
    max_turns: usize,
}

impl Runner {
    /// Create a new runner using the given client and default model.
    pub fn new(
        client: async_openai::Client<async_openai::config::OpenAIConfig>,
        default_model: &str,
    ) -> Self {
        Self {
            client,
            default_model: default_model.to_string(),
            tools: ToolContext::new(),
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Set the maximum turns per run.
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    /// Run a single query through the graph rooted at `agent`.
    pub async fn run(&self, agent: &Arc<Agent>, input: &str) -> Result<RunResult> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("agent_run", %run_id, agent = %agent.name);
        self.run_loop(agent, input).instrument(span).await
    }

    async fn run_loop(&self, agent: &Arc<Agent>, input: &str) -> Result<RunResult> {
        let mut current = Arc::clone(agent);

        let mut messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(current.instructions.clone())
                .build()
                .map_err(|e| SvarError::Agent(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(input.to_string())
                .build()
                .map_err(|e| SvarError::Agent(e.to_string()))?
                .into(),
        ];

        let mut turns = 0;
        let mut tool_calls_made = Vec::new();
        let mut handoffs = Vec::new();

        loop {
            turns += 1;
            if turns > self.max_turns {
                return Err(SvarError::Agent(format!(
                    "Run exceeded maximum turns ({})",
                    self.max_turns
                )));
            }

            debug!("Turn {} as {}", turns, current.name);

            let model = current
                .model
                .clone()
                .unwrap_or_else(|| self.default_model.clone());

            let mut builder = CreateChatCompletionRequestArgs::default();
            builder.model(&model).messages(messages.clone());
            let definitions = tool_definitions(&current);
            if !definitions.is_empty() {
                builder.tools(definitions);
            }
            let request = builder
                .build()
                .map_err(|e| SvarError::Agent(e.to_string()))?;

            let response = self
                .client
                .chat()
                .create(request)
                .await
                .map_err(|e| SvarError::OpenAI(format!("Agent API error: {}", e)))?;

            let choice = response
                .choices
                .first()
                .ok_or_else(|| SvarError::Agent("No response from model".to_string()))?;

            let tool_calls = match &choice.message.tool_calls {
                Some(calls) if !calls.is_empty() => calls,
                _ => {
                    // Content-only reply: the active agent's final answer.
                    return Ok(RunResult {
                        final_output: choice.message.content.clone().unwrap_or_default(),
                        agent_name: current.name.clone(),
                        handoffs,
                        tool_calls: tool_calls_made,
                        turns,
                    });
                }
            };

            // Add assistant message with tool calls to history.
            let assistant_msg = ChatCompletionRequestAssistantMessageArgs::default()
                .tool_calls(tool_calls.clone())
                .build()
                .map_err(|e| SvarError::Agent(e.to_string()))?;
            messages.push(assistant_msg.into());

            let mut next_agent: Option<Arc<Agent>> = None;

            for tool_call in tool_calls {
                let record = match current.find_handoff(&tool_call.function.name) {
                    Some(target) => {
                        info!("Handing off from {} to {}", current.name, target.name);
                        handoffs.push(target.name.clone());
                        let result = format!("Transferred to {}.", target.name);
                        next_agent = Some(target);
                        ToolCallRecord {
                            name: tool_call.function.name.clone(),
                            arguments: tool_call.function.arguments.clone(),
                            result,
                        }
                    }
                    None => self.execute_tool_call(tool_call).await,
                };

                let tool_msg = ChatCompletionRequestToolMessageArgs::default()
                    .tool_call_id(&tool_call.id)
                    .content(record.result.clone())
                    .build()
                    .map_err(|e| SvarError::Agent(e.to_string()))?;
                messages.push(tool_msg.into());

                tool_calls_made.push(record);
            }

            // A transfer swaps the active agent: same history, new system
            // prompt, new tool surface on the next request.
            if let Some(target) = next_agent {
                current = target;
                messages[0] = ChatCompletionRequestSystemMessageArgs::default()
                    .content(current.instructions.clone())
                    .build()
                    .map_err(|e| SvarError::Agent(e.to_string()))?
                    .into();
            }
        }
    }

    /// Execute a single function tool call and return a record of it.
    ///
    /// Tool failures are reported back to the model as text, not raised:
    /// an undeclared or malformed call becomes an error tool result.
    async fn execute_tool_call(&self, tool_call: &ChatCompletionMessageToolCall) -> ToolCallRecord {
        let name = &tool_call.function.name;
        let arguments = &tool_call.function.arguments;

        info!("Calling tool: {} with args: {}", name, arguments);

        // A transfer tool that reaches this path names an undeclared target;
        // report it to the model rather than crash.
        if let Some(target) = handoff_target(name) {
            return ToolCallRecord {
                name: name.clone(),
                arguments: arguments.clone(),
                result: format!("Unknown transfer target: {}", target),
            };
        }

        let result = match parse_tool_call(name, arguments) {
            Ok(tool) => match self.tools.execute(&tool).await {
                Ok(output) => output,
                Err(e) => format!("Tool error: {}", e),
            },
            Err(e) => format!("Failed to parse tool call: {}", e),
        };

        ToolCallRecord {
            name: name.clone(),
            arguments: arguments.clone(),
            result,
        }
    }
}

/// Result of running a query through the agent graph.
#[derive(Debug)]
pub struct RunResult {
    /// The final response content.
    pub final_output: String,
    /// Name of the agent that produced the final response.
    pub agent_name: String,
    /// Names of agents the conversation was handed off to, in order.
    pub handoffs: Vec<String>,
    /// Record of all tool calls made during the run, transfers included.
    pub tool_calls: Vec<ToolCallRecord>,
    /// Number of turns (LLM calls) used.
    pub turns: usize,
}

/// Record of a tool call made during a run.
#[derive(Debug, Clone)]
pub struct ToolCallRecord {
    /// Name of the tool called.
    pub name: String,
    /// JSON arguments passed to the tool.
    pub arguments: String,
    /// Result returned to the model.
    pub result: String,
}

impl std::fmt::Display for ToolCallRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_call_record_display() {
        let record = ToolCallRecord {
            name: "get_account_info".to_string(),
            arguments: r#"{"user_id": "42"}"#.to_string(),
            result: "{}".to_string(),
        };
        assert_eq!(
            format!("{}", record),
            r#"get_account_info({"user_id": "42"})"#
        );
    }

    #[test]
    fn test_with_max_turns() {
        let runner = Runner::new(crate::openai::create_client(), "gpt-4o-mini").with_max_turns(3);
        assert_eq!(runner.max_turns, 3);
    }

    #[tokio::test]
    async fn test_undeclared_transfer_becomes_tool_error() {
        use async_openai::types::{ChatCompletionToolType, FunctionCall};

        let runner = Runner::new(crate::openai::create_client(), "gpt-4o-mini");
        let call = ChatCompletionMessageToolCall {
            id: "call_1".to_string(),
            r#type: ChatCompletionToolType::Function,
            function: FunctionCall {
                name: "transfer_to_unknown".to_string(),
                arguments: "{}".to_string(),
            },
        };

        let record = runner.execute_tool_call(&call).await;
        assert_eq!(record.name, "transfer_to_unknown");
        assert_eq!(record.result, "Unknown transfer target: unknown");
    }
}
