//! # Quill CLI
//!
//! Batch execution of `.quill` document specification files.
//!
//! The [`RunCommand`] either executes an explicitly given spec file or
//! discovers every `.quill` file in a directory and executes them one by
//! one, reporting progress to a console-like sink.

use std::path::{Path, PathBuf};

use quill_runner::{DocumentRunner, DocumentSpec, SPEC_EXTENSION};

/// Crate version, exposed for `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A console-like sink the batch command reports progress to.
pub trait ConsoleSink {
    /// Write a user-visible progress message.
    fn write_message(&mut self, message: &str);
}

/// Sink that prints to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ConsoleSink for StdoutSink {
    fn write_message(&mut self, message: &str) {
        println!("{message}");
    }
}

impl ConsoleSink for Vec<String> {
    fn write_message(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Finds all `.quill` specification files in a directory, sorted by name.
pub fn discover_specs(directory: impl AsRef<Path>) -> std::io::Result<Vec<PathBuf>> {
    let mut specs: Vec<PathBuf> = std::fs::read_dir(directory)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(SPEC_EXTENSION))
        })
        .collect();
    specs.sort();
    Ok(specs)
}

/// The batch `run` command.
///
/// With an explicit input path, executes that file. Without one, discovers
/// every `.quill` file in the working directory; finding none is reported,
/// not an error.
pub struct RunCommand {
    /// Explicit specification file to execute.
    pub input: Option<PathBuf>,
    /// Directory searched when no input is given.
    pub directory: PathBuf,
    runner: DocumentRunner,
}

impl RunCommand {
    /// Creates a run command over the given directory.
    #[must_use]
    pub fn new(input: Option<PathBuf>, directory: impl Into<PathBuf>) -> Self {
        Self {
            input,
            directory: directory.into(),
            runner: DocumentRunner::default(),
        }
    }

    /// Replaces the runner (custom generator).
    #[must_use]
    pub fn with_runner(mut self, runner: DocumentRunner) -> Self {
        self.runner = runner;
        self
    }

    /// Executes the command, reporting progress to `sink`.
    pub async fn execute(&self, sink: &mut dyn ConsoleSink) -> anyhow::Result<()> {
        if let Some(input) = &self.input {
            self.execute_file(sink, input).await?;
            return Ok(());
        }

        let specs = discover_specs(&self.directory)?;
        if specs.is_empty() {
            sink.write_message(&format!(
                "Current directory does not contain any .{SPEC_EXTENSION} files."
            ));
            return Ok(());
        }

        for spec in &specs {
            self.execute_file(sink, spec).await?;
        }
        Ok(())
    }

    async fn execute_file(&self, sink: &mut dyn ConsoleSink, path: &Path) -> anyhow::Result<()> {
        sink.write_message(&format!("Executing file '{}'...", path.display()));

        let spec = DocumentSpec::load(path).await?;
        self.runner.execute(&spec).await?;

        sink.write_message("Done.");
        Ok(())
    }
}
