//! # Domarch - Domain Architecture Summarizer
//!
//! Summarizes protein domain architectures from hmmscan per-domain output.
//! For each query protein the library groups its domain hits, filters them
//! by statistical-significance thresholds, verifies that a required set of
//! target domains is present, orders the survivors by sequence position,
//! and emits one tab-separated report line describing the architecture.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domarch_core::{DomarchAnalyzer, config::DomarchConfig};
//!
//! let config = DomarchConfig {
//!     target_models: vec!["PAS".to_string(), "HisKA".to_string()],
//!     i_e_value_threshold: Some(1e-6),
//!     ..Default::default()
//! };
//!
//! let analyzer = DomarchAnalyzer::new(config);
//! let mut stdout = std::io::stdout();
//! let stats = analyzer.summarize_file("scan.domtblout", None, &mut stdout, None)?;
//! eprintln!("Summarized {} of {} proteins", stats.proteins_reported, stats.proteins_seen);
//! # Ok::<(), domarch_core::types::DomarchError>(())
//! ```
//!
//! ## Pipeline
//!
//! Parsed hits flow through a single-threaded streaming pass:
//!
//! `parser` → [`grouper::ProteinGrouper`] → per-protein batch →
//! [`filter::filter_protein`] → [`render`] (+ optional [`linker`]) →
//! [`results::ProteinSummary`] → one report line.
//!
//! Only one protein's hits are held in memory at a time; each batch is
//! processed to completion (or silently suppressed) before the next one
//! starts.
//!
//! ## Module Organization
//!
//! - [`config`]: Run configuration (thresholds, targets, species label)
//! - [`types`]: Core data types and the error enum
//! - [`parser`]: hmmscan `--domtblout` parser
//! - [`grouper`]: Streaming group-by-adjacency over hit records
//! - [`filter`]: Significance gates and position ordering
//! - [`render`]: Overview and detailed architecture strings
//! - [`linker`]: Alignment lookup and inter-domain linker extraction
//! - [`results`]: Assembled per-protein summaries and run counters
//! - [`output`]: Report-line and linker-FASTA writers
//! - [`engine`]: The analyzer driving the whole pipeline
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, DomarchError>`](types::DomarchError).
//! Threshold and presence-gate failures are not errors: they silently
//! suppress the affected protein. Errors are reserved for unreadable or
//! malformed input and for hits of one protein that disagree on query id
//! or length, which aborts the whole run.

pub mod config;
pub mod constants;
pub mod engine;
pub mod filter;
pub mod grouper;
pub mod linker;
pub mod output;
pub mod parser;
pub mod render;
pub mod results;
pub mod types;

pub use engine::DomarchAnalyzer;
