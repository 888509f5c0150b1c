//! # Quill Runner
//!
//! Loads `.quill` document specification files and executes their
//! generation pipelines.
//!
//! A specification file describes one self-contained generation: the
//! services to describe, the generator settings, and the output files to
//! write. The batch CLI discovers and runs these files; the HTTP serving
//! core never touches them.
//!
//! ## Example
//!
//! ```no_run
//! use quill_runner::{DocumentRunner, DocumentSpec};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = DocumentSpec::load("orders.quill").await?;
//! DocumentRunner::default().execute(&spec).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod runner;
mod spec;

pub use error::{RunnerError, RunnerResult};
pub use runner::DocumentRunner;
pub use spec::{DocumentSpec, SPEC_EXTENSION};
