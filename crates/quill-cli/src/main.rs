//! Quill CLI - entry point.

use std::path::PathBuf;

use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quill_cli::{RunCommand, StdoutSink};

/// Command-line arguments.
struct Args {
    /// Optional specification file to execute.
    input: Option<PathBuf>,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let mut input = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                "--version" | "-v" => {
                    println!("quill {}", quill_cli::VERSION);
                    std::process::exit(0);
                }
                other if other.starts_with('-') => {
                    eprintln!("Unknown argument: {other}");
                    eprintln!("Use --help for usage information");
                    std::process::exit(1);
                }
                other => {
                    if input.replace(PathBuf::from(other)).is_some() {
                        eprintln!("Only one input file may be given");
                        std::process::exit(1);
                    }
                }
            }
        }

        Self { input }
    }
}

fn print_help() {
    println!(
        r"Quill - API description document runner

USAGE:
    quill [INPUT]

ARGS:
    [INPUT]    A .quill document specification file to execute.
               When omitted, every .quill file in the current
               directory is executed.

OPTIONS:
    -h, --help       Print help information
    -v, --version    Print version information

EXAMPLES:
    # Execute a single specification
    quill orders.quill

    # Execute every specification in the current directory
    quill
"
    );
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quill=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let directory = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Failed to resolve working directory: {}", e);
            std::process::exit(1);
        }
    };

    let command = RunCommand::new(args.input, directory);
    if let Err(e) = command.execute(&mut StdoutSink).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
