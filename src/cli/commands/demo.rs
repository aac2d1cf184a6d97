//! Demo command - run the canned queries through the triage assistant.

use crate::agent::{acme_assistant, Runner};
use crate::cli::{preflight, Output};
use crate::config::Settings;
use crate::openai::create_client;
use anyhow::Result;

/// The three canned demo queries, exercising each route of the graph:
/// account handoff, triage fallback, and web-search handoff.
pub const DEMO_QUERIES: [&str; 3] = [
    "What's my ACME account balance doc? My user ID is 1234567890",
    "Ooh i've got money to spend! How big is the input and how fast is the \
     output of the dynamite dispenser?",
    "Hmmm, what about duck hunting gear - what's trending right now?",
];

/// Run the demo command.
///
/// Queries run sequentially, one awaited call each; a failure terminates
/// the run.
pub async fn run_demo(settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check() {
        Output::error(&format!("{}", e));
        Output::info("Run 'svar doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let triage = acme_assistant(&settings.models);
    let runner = Runner::new(create_client(), &settings.models.triage)
        .with_max_turns(settings.agent.max_turns);

    for query in DEMO_QUERIES {
        let spinner = Output::spinner("Assistant thinking...");

        match runner.run(&triage, query).await {
            Ok(result) => {
                spinner.finish_and_clear();
                println!("User: {}", query);
                println!("{}", result.final_output);
                println!("---");

                if !result.handoffs.is_empty() {
                    tracing::debug!(
                        "Answered by {} after handoff via {:?} in {} turn(s)",
                        result.agent_name,
                        result.handoffs,
                        result.turns
                    );
                }
            }
            Err(e) => {
                spinner.finish_and_clear();
                Output::error(&format!("Run failed: {}", e));
                return Err(e.into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_queries_fixed_and_ordered() {
        assert_eq!(DEMO_QUERIES.len(), 3);
        assert!(DEMO_QUERIES[0].contains("user ID is 1234567890"));
        assert!(DEMO_QUERIES[1].contains("dynamite dispenser"));
        assert!(DEMO_QUERIES[2].contains("trending"));
    }
}
