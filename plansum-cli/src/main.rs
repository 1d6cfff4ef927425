use clap::Parser;
use plansum_core::adapters::{StdinPlanSource, StdoutWriter};
use plansum_core::pipeline::{run_summary, write_summary};
use plansum_core::settings::{OutputFormat, SummarySettings};
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "plansum",
    version,
    about = "Summarize a Terraform JSON plan read from stdin, one line per resource."
)]
struct Cli {
    /// Exclude read operations from being displayed.
    #[arg(short = 'x', long, default_value_t = false)]
    exclude_reads: bool,

    /// Don't trim the common prefix from addresses.
    #[arg(long, default_value_t = false)]
    no_trim: bool,

    /// Output format (text, json, markdown).
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

impl Cli {
    fn settings(&self) -> SummarySettings {
        SummarySettings {
            exclude_reads: self.exclude_reads,
            no_trim: self.no_trim,
            format: self.format.into(),
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        // stdout is the only user-facing stream; logs go to stderr.
        report_error(&mut std::io::stdout(), &e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

/// Print the error chain on one line. A closed stdout must not turn a failed
/// run into a panic, so write errors are ignored.
fn report_error(out: &mut dyn Write, e: &anyhow::Error) {
    let _ = writeln!(out, "{:#}", e);
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings();
    debug!(?settings, "parsed arguments");

    let outcome = run_summary(&settings, &StdinPlanSource)?;
    write_summary(&outcome, &mut StdoutWriter)?;
    Ok(())
}
