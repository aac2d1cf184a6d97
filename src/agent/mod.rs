//! Agent system: persona definitions, tool calling, and handoff routing.
//!
//! Agents are immutable configuration records (name, instructions, tools,
//! handoff targets) interpreted by the hosted model. The runner drives the
//! tool-calling loop and follows transfers between agents; all routing
//! decisions are made remotely.

mod definition;
mod personas;
mod runner;
mod tools;

pub use definition::{prompt_with_handoff_instructions, Agent};
pub use personas::acme_assistant;
pub use runner::{RunResult, Runner, ToolCallRecord};
pub use tools::{
    handoff_target, parse_tool_call, tool_definitions, ToolCall, ToolContext, ToolSpec,
};
