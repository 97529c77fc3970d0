use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracker_core::sink::MultiSink;
use tracker_core::*;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Fitness tracker: distance, speed and calories from sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process sensor packages and print summaries (default: built-in samples)
    Run {
        /// Package file (.json, .toml or .csv)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long)]
        format: Option<Format>,

        /// Also append summaries to the journal in the data directory
        #[arg(long)]
        journal: bool,

        /// Stop at the first invalid package
        #[arg(long)]
        fail_fast: bool,
    },

    /// Export the journal to CSV
    Export {
        /// CSV file to append to (default: <data-dir>/summaries.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<ExitCode> {
    tracker_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Some(Commands::Run {
            input,
            format,
            journal,
            fail_fast,
        }) => cmd_run(
            &config,
            data_dir,
            input,
            format.map(OutputFormat::from),
            journal,
            fail_fast,
        ),
        Some(Commands::Export { output }) => cmd_export(data_dir, output),
        None => cmd_run(&config, data_dir, None, None, false, false),
    }
}

fn cmd_run(
    config: &Config,
    data_dir: PathBuf,
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
    journal: bool,
    fail_fast: bool,
) -> Result<ExitCode> {
    let packages = match &input {
        Some(path) => load_packages(path)?,
        None => sample_packages(),
    };

    let stdout = io::stdout().lock();
    let mut sink = MultiSink::new();
    match format.unwrap_or(config.output.format) {
        OutputFormat::Text => sink.push(TextSink::new(stdout, config.output.precision)),
        OutputFormat::Json => sink.push(JsonSink::new(stdout)),
    }

    if journal {
        let run_id = uuid::Uuid::new_v4();
        let path = tracker_core::config::DataConfig::journal_path(&data_dir);
        tracing::info!("Journaling run {} to {:?}", run_id, path);
        sink.push(JournalSink::new(path, run_id));
    }

    let options = RunOptions {
        fail_fast: fail_fast || config.processing.fail_fast,
    };
    let report = match run(&packages, &mut sink, &options) {
        Ok(report) => report,
        Err(error @ Error::Package { .. }) => {
            eprintln!("error: {}", error);
            return Ok(ExitCode::FAILURE);
        }
        Err(error) => return Err(error),
    };

    for failure in &report.failures {
        eprintln!("error: {}", failure);
    }

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_export(data_dir: PathBuf, output: Option<PathBuf>) -> Result<ExitCode> {
    let journal_path = tracker_core::config::DataConfig::journal_path(&data_dir);
    let csv_path = output.unwrap_or_else(|| data_dir.join("summaries.csv"));

    if !journal_path.exists() {
        println!("No journal found - nothing to export.");
        return Ok(ExitCode::SUCCESS);
    }

    let count = tracker_core::export::journal_to_csv(&journal_path, &csv_path)?;

    println!("✓ Exported {} summaries to CSV", count);
    println!("  CSV: {}", csv_path.display());

    Ok(ExitCode::SUCCESS)
}
