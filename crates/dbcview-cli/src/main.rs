use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use dbcview::{RunReport, SelectionArgs, ViewOptions, run_main};
use dbcview_dot::OutputFormat;
use dbcview_error::{Error, ErrorKind};

#[derive(Parser, Debug)]
#[command(
    name = "dbcview",
    about = "dbcview: see which ECUs exchange which CAN messages",
    version
)]
pub struct Cli {
    /// DBC file to read
    #[arg(value_name = "FILENAME")]
    filename: PathBuf,

    /// Nodes whose traffic must be shown, e.g. MOT CHG or MOT,CHG (default: all)
    #[arg(value_name = "NODES")]
    nodes: Vec<String>,

    #[command(flatten)]
    selection: SelectionArgs,

    /// Output directory for the graph (defaults to a new temporary directory)
    #[arg(short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Output format: pdf, svg, png, or dot (DOT source only)
    #[arg(long, value_name = "FMT", default_value = "pdf")]
    format: OutputFormat,

    /// Write the graph without opening it
    #[arg(long = "no-view", default_value_t = false)]
    no_view: bool,
}

pub fn run(args: Cli) -> ExitCode {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = ViewOptions {
        selection: args.selection.into_config(&args.nodes),
        filename: args.filename,
        output_dir: args.output,
        format: args.format,
        view: !args.no_view,
    };

    let code = match run_main(&opts) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            tracing::error!(error = %e, "execution failed");
            ExitCode::FAILURE
        }
    };

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    code
}

fn print_report(report: &RunReport) {
    if report.edge_count == 0 {
        eprintln!(
            "No edges found between [{}] and [{}]",
            report.senders.join(", "),
            report.receivers.join(", ")
        );
    }
    println!("{}", report.artifact.primary().display());
}

fn print_error(e: &Error) {
    match e.kind() {
        ErrorKind::EmptyCatalog => eprintln!("No nodes found in this DBC!"),
        ErrorKind::UnknownNodeName => {
            eprintln!(
                "specified nodes: [{}] not found in {}",
                e.context_value("invalid").unwrap_or_default(),
                e.context_value("file").unwrap_or_default()
            );
            eprintln!(
                "nodes in this file: [{}]",
                e.context_value("known").unwrap_or_default()
            );
        }
        kind if kind.is_user_error() => eprintln!("{}", e.message()),
        _ => eprintln!("Error: {e}"),
    }
}

pub fn main() -> ExitCode {
    let args = Cli::parse();
    run(args)
}
