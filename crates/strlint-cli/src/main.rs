use std::io;

use clap::Parser;
use strlint_checker::{CheckError, Input};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `STRLINT_LOG=debug`.
const LOG_ENV: &str = "STRLINT_LOG";

const EXIT_STATUS_HELP: &str = "\
Exit status:
  0    no issues found
  N    number of issues found, capped at 255
  Codes 1 and 2 are also used for failures: 1 on a read error, 2 on bad
  arguments. A failure writes nothing to stdout and prints the error on
  stderr, while findings always end with an \"issues found\" summary line.";

#[derive(Parser)]
#[command(name = "strlint")]
#[command(about = "Flag string literals whose s/f interpolation prefix disagrees with their content")]
#[command(version)]
#[command(after_help = EXIT_STATUS_HELP)]
struct Cli {
    /// Source file to check, or `-` to read standard input
    input: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    match run(&cli.input) {
        Ok(count) => std::process::exit(exit_code(count)),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(arg: &str) -> Result<usize, CheckError> {
    let input = Input::from_arg(arg);
    tracing::debug!(%input, "checking");

    // Read everything first so an I/O failure leaves stdout untouched
    let source = input.read()?;
    strlint_checker::lint(&source, io::stdout().lock())
}

/// Logs go to stderr; stdout carries only the report.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

/// Map the diagnostic count to a process exit code. Counts past 255 are
/// clamped so they never wrap around to a clean exit.
fn exit_code(count: usize) -> i32 {
    count.min(u8::MAX as usize) as i32
}
