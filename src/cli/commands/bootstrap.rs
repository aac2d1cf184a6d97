//! Bootstrap command - create a hosted knowledge collection.

use crate::cli::{preflight, Output};
use crate::config::Settings;
use crate::knowledge::{BootstrapOutcome, KnowledgeStore, OpenAiKnowledgeBackend};
use crate::openai::create_client;
use anyhow::Result;
use std::sync::Arc;

/// Run the bootstrap command.
///
/// Failure is reported as output, not as a process error: the outcome is
/// data either way.
pub async fn run_bootstrap(name: Option<String>, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check() {
        Output::error(&format!("{}", e));
        Output::info("Run 'svar doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let name = name.unwrap_or_else(|| settings.knowledge.store_name.clone());
    let store = KnowledgeStore::new(Arc::new(OpenAiKnowledgeBackend::new(create_client())));

    let spinner = Output::spinner(&format!("Creating collection '{}'...", name));
    let outcome = store.bootstrap(&name).await;
    spinner.finish_and_clear();

    match outcome {
        BootstrapOutcome::Created(details) => {
            Output::success("Knowledge collection created.");
            Output::kv("ID", &details.id);
            Output::kv("Name", &details.name);
            Output::kv(
                "Created",
                &details.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            );
            Output::kv("Files", &details.file_count.to_string());
        }
        BootstrapOutcome::Failed { error } => {
            Output::error(&format!("Failed to create collection: {}", error));
        }
    }

    Ok(())
}
