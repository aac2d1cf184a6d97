//! The demo agent graph: an ACME Shop assistant that triages to
//! account and web-search specialists.

use super::definition::{prompt_with_handoff_instructions, Agent};
use super::tools::ToolSpec;
use crate::config::ModelSettings;
use std::sync::Arc;

/// Build the ACME Shop assistant graph.
///
/// Returns the triage agent, which can hand off to the account agent (backed
/// by the `get_account_info` tool) or the web-search agent (a search-enabled
/// model with no local tools).
pub fn acme_assistant(models: &ModelSettings) -> Arc<Agent> {
    let search_agent = Arc::new(
        Agent::new(
            "SearchAgent",
            "You immediately search the web for up-to-date information on the \
            user's query and answer from what you find.",
        )
        .with_model(&models.search),
    );

    let account_agent = Arc::new(
        Agent::new(
            "AccountAgent",
            "You provide account information based on a user ID using the \
            get_account_info tool.",
        )
        .with_tool(ToolSpec::GetAccountInfo)
        .with_model(&models.account),
    );

    Arc::new(
        Agent::new(
            "Assistant",
            &prompt_with_handoff_instructions(
                "You are the virtual assistant for Acme Shop. Welcome the user \
                and ask how you can help.\n\
                Based on the user's intent, route to:\n\
                - AccountAgent for account-related queries\n\
                - SearchAgent for anything requiring real-time web search",
            ),
        )
        .with_handoff(account_agent)
        .with_handoff(search_agent)
        .with_model(&models.triage),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_shape() {
        let triage = acme_assistant(&ModelSettings::default());
        assert_eq!(triage.name, "Assistant");
        assert_eq!(triage.handoffs.len(), 2);
        assert!(triage.tools.is_empty());

        let account = &triage.handoffs[0];
        assert_eq!(account.name, "AccountAgent");
        assert_eq!(account.tools, vec![ToolSpec::GetAccountInfo]);
        assert!(account.handoffs.is_empty());

        let search = &triage.handoffs[1];
        assert_eq!(search.name, "SearchAgent");
        assert!(search.tools.is_empty());
        assert_eq!(search.model.as_deref(), Some("gpt-4o-search-preview"));
    }

    #[test]
    fn test_triage_instructions_carry_handoff_preamble() {
        let triage = acme_assistant(&ModelSettings::default());
        assert!(triage.instructions.contains("transfer tool"));
        assert!(triage.instructions.contains("Acme Shop"));
    }
}
