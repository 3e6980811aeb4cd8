//! table2csv - Export a line-drawn table to CSV
//!
//! Reads a JSON drawing (ruling lines plus placed text), rebuilds the cell
//! grid and writes it as delimited text.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use linegrid_core::api::{
    DestinationConfig, ExportBuilder, ExportOutcome, FileDestination, JsonSource,
    WriterDestination,
};
use linegrid_core::converter::LineEnding;
use linegrid_core::diagnostics::TracingSink;
use linegrid_core::table::{DiagonalPolicy, MAX_PRECISION};

/// Environment variable naming the default export directory.
const ROOT_ENV: &str = "LINEGRID_ROOT";

/// Treatment of segments that are neither horizontal nor vertical.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum DiagonalMode {
    /// Pool their endpoints like any other segment (default)
    #[default]
    Include,
    /// Ignore them
    Skip,
    /// Fail the export
    Reject,
}

impl From<DiagonalMode> for DiagonalPolicy {
    fn from(mode: DiagonalMode) -> Self {
        match mode {
            DiagonalMode::Include => DiagonalPolicy::Include,
            DiagonalMode::Skip => DiagonalPolicy::Skip,
            DiagonalMode::Reject => DiagonalPolicy::Reject,
        }
    }
}

/// Rebuild a table from ruling lines and placed text, and export it as CSV.
#[derive(Parser, Debug)]
#[command(name = "table2csv")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON drawing with "lines" and "texts" arrays, or "-" for stdin
    input: String,

    /// Output file path
    #[arg(short = 'o', long, conflicts_with_all = ["output_dir", "stdout"])]
    output: Option<PathBuf>,

    /// Directory to write ExportedTable.csv into
    #[arg(short = 'O', long = "output-dir", conflicts_with = "stdout")]
    output_dir: Option<PathBuf>,

    /// Write CSV to stdout instead of a file
    #[arg(long, action = ArgAction::SetTrue)]
    stdout: bool,

    /// Prepend a UTF-8 byte order mark
    #[arg(long, action = ArgAction::SetTrue)]
    bom: bool,

    /// Terminate rows with CRLF instead of LF
    #[arg(long, action = ArgAction::SetTrue)]
    crlf: bool,

    /// Field delimiter
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Decimal digits kept when merging boundary coordinates
    #[arg(
        short = 'p',
        long,
        default_value = "3",
        value_parser = clap::value_parser!(u32).range(0..=MAX_PRECISION as i64)
    )]
    precision: u32,

    /// How to treat diagonal segments
    #[arg(long, value_enum, default_value = "include")]
    diagonal: DiagonalMode,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the output file once: explicit path, then directory, then the
/// environment root, then the user's documents folder, then the working
/// directory.
fn resolve_destination(args: &Args) -> DestinationConfig {
    let config = if let Some(ref path) = args.output {
        DestinationConfig::new(path)
    } else if let Some(ref dir) = args.output_dir {
        DestinationConfig::in_dir(dir)
    } else if let Some(root) = std::env::var_os(ROOT_ENV).filter(|v| !v.is_empty()) {
        DestinationConfig::in_dir(PathBuf::from(root))
    } else if let Some(docs) = dirs::document_dir() {
        DestinationConfig::in_dir(docs)
    } else {
        DestinationConfig::in_dir(".")
    };
    config.with_bom(args.bom)
}

fn open_input(input: &str) -> Result<Box<dyn io::Read>> {
    if input == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let path = Path::new(input);
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn run(args: &Args) -> Result<()> {
    let builder = ExportBuilder::new()
        .precision(args.precision)
        .diagonal_policy(args.diagonal.into())
        .delimiter(args.delimiter)
        .line_ending(if args.crlf {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        });

    let mut source = JsonSource::new(open_input(&args.input)?);
    let mut sink = TracingSink;

    let exported = if args.stdout {
        let mut dest = WriterDestination::new(io::stdout().lock(), "<stdout>");
        builder.export(&mut source, &mut dest, &mut sink)
    } else {
        let mut dest = FileDestination::new(resolve_destination(args));
        let exported = builder.export(&mut source, &mut dest, &mut sink);
        if let Ok(ExportOutcome::Written { .. }) = exported {
            eprintln!("CSV file created at: {}", dest.path().display());
        }
        exported
    };
    let outcome = exported.with_context(|| format!("failed to export {}", args.input))?;

    match outcome {
        ExportOutcome::NothingSelected => {
            tracing::info!("nothing to export");
        }
        ExportOutcome::Written {
            rows,
            columns,
            placed,
            dropped,
            ..
        } => {
            tracing::info!(rows, columns, placed, dropped, "export finished");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
