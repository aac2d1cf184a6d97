//! Agent persona definitions.

use super::tools::{ToolSpec, HANDOFF_PREFIX};
use std::sync::Arc;

/// An agent persona: a name, natural-language instructions, and the
/// capabilities the model may invoke while acting as this agent.
///
/// Agents are built once at startup and shared immutably via `Arc`.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Display name, also the basis of this agent's transfer tool name.
    pub name: String,
    /// System prompt for the model while this agent is active.
    pub instructions: String,
    /// Function tools this agent may call.
    pub tools: Vec<ToolSpec>,
    /// Agents this one may hand the conversation off to.
    pub handoffs: Vec<Arc<Agent>>,
    /// Model override; falls back to the runner's default when None.
    pub model: Option<String>,
}

impl Agent {
    /// Create a new agent with no tools or handoffs.
    pub fn new(name: &str, instructions: &str) -> Self {
        Self {
            name: name.to_string(),
            instructions: instructions.to_string(),
            tools: Vec::new(),
            handoffs: Vec::new(),
            model: None,
        }
    }

    /// Add a function tool.
    pub fn with_tool(mut self, tool: ToolSpec) -> Self {
        self.tools.push(tool);
        self
    }

    /// Add a handoff target.
    pub fn with_handoff(mut self, target: Arc<Agent>) -> Self {
        self.handoffs.push(target);
        self
    }

    /// Use a specific model for this agent.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    /// Name of the transfer tool that hands off to this agent.
    pub fn handoff_tool_name(&self) -> String {
        format!("{}{}", HANDOFF_PREFIX, snake_case(&self.name))
    }

    /// Resolve a transfer tool name against this agent's declared handoffs.
    pub fn find_handoff(&self, tool_name: &str) -> Option<Arc<Agent>> {
        self.handoffs
            .iter()
            .find(|target| target.handoff_tool_name() == tool_name)
            .cloned()
    }
}

/// Prepend the standard multi-agent preamble to an agent's instructions.
///
/// Triage-style agents need the model to understand that transfer tools move
/// the conversation rather than answer it; this mirrors the prompt prefix the
/// hosted agent SDKs ship with.
pub fn prompt_with_handoff_instructions(instructions: &str) -> String {
    format!(
        "# Multi-agent context\n\
        You are part of a multi-agent system. Each agent handles a different \
        kind of request, and the conversation can be moved between agents by \
        calling a transfer tool (named `transfer_to_<agent>`).\n\
        When a transfer tool matches the user's intent, call it instead of \
        answering yourself. Transfers happen behind the scenes, so never \
        mention or draw attention to them in your replies.\n\n{}",
        instructions
    )
}

/// Lowercase a persona name into snake_case for tool naming.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else if c == ' ' || c == '-' {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_names() {
        assert_eq!(snake_case("AccountAgent"), "account_agent");
        assert_eq!(snake_case("SearchAgent"), "search_agent");
        assert_eq!(snake_case("Assistant"), "assistant");
        assert_eq!(snake_case("Web Search"), "web_search");
    }

    #[test]
    fn test_handoff_tool_name() {
        let agent = Agent::new("AccountAgent", "instructions");
        assert_eq!(agent.handoff_tool_name(), "transfer_to_account_agent");
    }

    #[test]
    fn test_find_handoff() {
        let child = Arc::new(Agent::new("SearchAgent", "search"));
        let parent = Agent::new("Assistant", "triage").with_handoff(child.clone());

        let found = parent.find_handoff("transfer_to_search_agent").unwrap();
        assert_eq!(found.name, "SearchAgent");
        assert!(parent.find_handoff("transfer_to_unknown").is_none());
    }

    #[test]
    fn test_handoff_prompt_keeps_instructions() {
        let prompt = prompt_with_handoff_instructions("Welcome the user.");
        assert!(prompt.contains("transfer tool"));
        assert!(prompt.ends_with("Welcome the user."));
    }
}
