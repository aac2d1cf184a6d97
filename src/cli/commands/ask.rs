//! Ask command - a single ad-hoc question through the triage assistant.

use crate::agent::{acme_assistant, Runner};
use crate::cli::{preflight, Output};
use crate::config::Settings;
use crate::openai::create_client;
use anyhow::Result;

/// Run the ask command.
pub async fn run_ask(question: &str, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check() {
        Output::error(&format!("{}", e));
        Output::info("Run 'svar doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let triage = acme_assistant(&settings.models);
    let runner = Runner::new(create_client(), &settings.models.triage)
        .with_max_turns(settings.agent.max_turns);

    let spinner = Output::spinner("Assistant thinking...");

    match runner.run(&triage, question).await {
        Ok(result) => {
            spinner.finish_and_clear();

            println!("\n{}\n", result.final_output);

            if !result.tool_calls.is_empty() {
                Output::header(&format!("Tool calls ({})", result.tool_calls.len()));
                for call in &result.tool_calls {
                    Output::info(&format!("  {} {}", call.name, truncate(&call.arguments, 60)));
                }
                println!();
            }

            Output::info(&format!(
                "Answered by {} in {} turn(s)",
                result.agent_name, result.turns
            ));
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Run failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    // Back off to a char boundary; tool arguments can carry multi-byte text.
    let mut end = max_len.saturating_sub(3);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("0123456789", 8), "01234...");
    }

    #[test]
    fn test_truncate_multibyte_near_cut() {
        let args = format!("{}{}", "a".repeat(56), "💳💳💳");
        assert_eq!(truncate(&args, 60), format!("{}...", "a".repeat(56)));

        let all_wide = "💳".repeat(20);
        let cut = truncate(&all_wide, 10);
        assert!(cut.ends_with("..."));
        assert!(cut.len() <= 10);
    }
}
