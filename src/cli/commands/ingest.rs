//! Ingest command - upload files into a hosted knowledge collection.

use crate::cli::{preflight, Output};
use crate::config::Settings;
use crate::knowledge::{KnowledgeStore, OpenAiKnowledgeBackend, UploadStatus};
use crate::openai::create_client;
use anyhow::Result;
use std::sync::Arc;

/// Run the ingest command.
///
/// Per-file failures are reported and counted but do not abort the batch
/// or fail the process.
pub async fn run_ingest(files: &[String], store_id: &str) -> Result<()> {
    if let Err(e) = preflight::check() {
        Output::error(&format!("{}", e));
        Output::info("Run 'svar doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let store = KnowledgeStore::new(Arc::new(OpenAiKnowledgeBackend::new(create_client())));

    let mut uploaded = 0usize;
    let mut failed = 0usize;

    for file in files {
        let path = Settings::expand_path(file);
        let spinner = Output::spinner(&format!("Uploading {}...", path.display()));
        let report = store.upload_file(&path, store_id).await;
        spinner.finish_and_clear();

        match report.status {
            UploadStatus::Success => {
                uploaded += 1;
                Output::success(&format!("{}: uploaded", report.file));
            }
            UploadStatus::Failed => {
                failed += 1;
                Output::error(&format!(
                    "{}: failed ({})",
                    report.file,
                    report.error.unwrap_or_default()
                ));
            }
        }
    }

    println!();
    Output::info(&format!(
        "{} uploaded, {} failed (collection {})",
        uploaded, failed, store_id
    ));

    Ok(())
}
