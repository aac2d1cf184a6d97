//! Tool definitions and implementations for the agent system.

use super::definition::Agent;
use crate::account;
use crate::error::{Result, SvarError};
use serde::{Deserialize, Serialize};

/// Prefix shared by all handoff tool names.
pub const HANDOFF_PREFIX: &str = "transfer_to_";

/// Function tools an agent can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSpec {
    /// Look up account details for a user ID.
    GetAccountInfo,
}

/// A parsed tool invocation from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// Fetch account information for a user.
    GetAccountInfo { user_id: String },
}

/// Tool execution context.
///
/// Currently stateless: the only local tool serves fixed demo data. Real
/// backends would be injected here, the way the runner itself receives its
/// client.
#[derive(Debug, Default)]
pub struct ToolContext;

impl ToolContext {
    /// Create a new tool context.
    pub fn new() -> Self {
        Self
    }

    /// Execute a tool call and return the result as a string for the model.
    pub async fn execute(&self, tool: &ToolCall) -> Result<String> {
        match tool {
            ToolCall::GetAccountInfo { user_id } => {
                let info = account::get_account_info(user_id);
                Ok(serde_json::to_string(&info)?)
            }
        }
    }
}

/// If `tool_name` is a transfer tool, return the target agent slug.
pub fn handoff_target(tool_name: &str) -> Option<&str> {
    tool_name.strip_prefix(HANDOFF_PREFIX).filter(|s| !s.is_empty())
}

/// Build the OpenAI tool definitions for an agent: its declared function
/// tools plus one transfer tool per handoff target.
pub fn tool_definitions(agent: &Agent) -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    let mut definitions = Vec::with_capacity(agent.tools.len() + agent.handoffs.len());

    for tool in &agent.tools {
        match tool {
            ToolSpec::GetAccountInfo => definitions.push(ChatCompletionTool {
                r#type: ChatCompletionToolType::Function,
                function: FunctionObject {
                    name: "get_account_info".to_string(),
                    description: Some(
                        "Look up account information (name, balance, membership status) \
                        for a given user ID."
                            .to_string(),
                    ),
                    parameters: Some(serde_json::json!({
                        "type": "object",
                        "properties": {
                            "user_id": {
                                "type": "string",
                                "description": "The user's account ID"
                            }
                        },
                        "required": ["user_id"]
                    })),
                    strict: None,
                },
            }),
        }
    }

    for target in &agent.handoffs {
        definitions.push(ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: target.handoff_tool_name(),
                description: Some(format!(
                    "Transfer the conversation to {} when it should handle the request.",
                    target.name
                )),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": {}
                })),
                strict: None,
            },
        });
    }

    definitions
}

/// Parse a function tool call from the OpenAI response format.
///
/// Transfer tools are routed before this is reached; an undeclared name here
/// is an error the runner reports back to the model as a tool result.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| SvarError::Agent(format!("Invalid tool arguments: {}", e)))?;

    match name {
        "get_account_info" => {
            let user_id = args["user_id"]
                .as_str()
                .ok_or_else(|| SvarError::Agent("Missing 'user_id' argument".to_string()))?
                .to_string();
            Ok(ToolCall::GetAccountInfo { user_id })
        }
        _ => Err(SvarError::Agent(format!("Unknown tool: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_parse_get_account_info() {
        let tool = parse_tool_call("get_account_info", r#"{"user_id": "1234567890"}"#).unwrap();
        match tool {
            ToolCall::GetAccountInfo { user_id } => assert_eq!(user_id, "1234567890"),
        }
    }

    #[test]
    fn test_parse_missing_argument() {
        let err = parse_tool_call("get_account_info", r#"{}"#).unwrap_err();
        assert!(err.to_string().contains("user_id"));
    }

    #[test]
    fn test_parse_unknown_tool() {
        let err = parse_tool_call("send_invoice", r#"{}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown tool"));
    }

    #[test]
    fn test_handoff_target() {
        assert_eq!(handoff_target("transfer_to_search_agent"), Some("search_agent"));
        assert_eq!(handoff_target("transfer_to_"), None);
        assert_eq!(handoff_target("get_account_info"), None);
    }

    #[tokio::test]
    async fn test_execute_account_tool_returns_json() {
        let context = ToolContext::new();
        let result = context
            .execute(&ToolCall::GetAccountInfo {
                user_id: "42".to_string(),
            })
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["user_id"], "42");
        assert_eq!(value["name"], "Bugs Bunny");
    }

    #[test]
    fn test_tool_definitions_include_handoffs() {
        let account = Arc::new(
            Agent::new("AccountAgent", "accounts").with_tool(ToolSpec::GetAccountInfo),
        );
        let search = Arc::new(Agent::new("SearchAgent", "search"));
        let triage = Agent::new("Assistant", "triage")
            .with_handoff(account.clone())
            .with_handoff(search.clone());

        let names: Vec<String> = tool_definitions(&triage)
            .into_iter()
            .map(|t| t.function.name)
            .collect();
        assert_eq!(
            names,
            vec!["transfer_to_account_agent", "transfer_to_search_agent"]
        );

        let account_names: Vec<String> = tool_definitions(&account)
            .into_iter()
            .map(|t| t.function.name)
            .collect();
        assert_eq!(account_names, vec!["get_account_info"]);

        assert!(tool_definitions(&search).is_empty());
    }
}
