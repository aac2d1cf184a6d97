//! Svar - Multi-agent triage assistant demo
//!
//! A CLI demo of multi-agent triage and handoffs over the OpenAI API.
//! The name "Svar" comes from the Norwegian/Scandinavian word for "answer."
//!
//! # Overview
//!
//! Svar declares a small agent graph - a triage assistant that hands off to
//! an account specialist or a web-search specialist - and drives queries
//! through it. Intent routing, tool selection, and web retrieval all happen
//! inside the hosted model; this crate declares the graph, executes the
//! local tools the model calls, and reports results. It also ships helpers
//! for creating hosted knowledge collections and uploading documents to
//! them.
//!
//! # Architecture
//!
//! - `config` - Configuration management
//! - `account` - Dummy account directory behind the `get_account_info` tool
//! - `agent` - Agent definitions, tool calling, handoff-following runner
//! - `knowledge` - Hosted vector-store helpers (create, upload, attach)
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use svar::agent::{acme_assistant, Runner};
//! use svar::config::Settings;
//! use svar::openai::create_client;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let triage = acme_assistant(&settings.models);
//!     let runner = Runner::new(create_client(), &settings.models.triage);
//!
//!     let result = runner.run(&triage, "What's my account balance? ID 1234567890").await?;
//!     println!("{}", result.final_output);
//!
//!     Ok(())
//! }
//! ```

pub mod account;
pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod openai;

pub use error::{Result, SvarError};
