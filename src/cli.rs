use clap::{Args, Parser, Subcommand, ValueEnum};
use codescore::report::{Locale, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "codescore",
    version,
    about = "Heuristic code quality scorer for source snippets"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single file, or stdin when no file is given
    Analyze(AnalyzeCommand),
    /// Score every supported source file under a directory
    Scan(ScanCommand),
    /// List supported language ids
    Languages,
}

#[derive(Args)]
pub struct OutputArgs {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long, value_enum)]
    pub locale: Option<UiLocale>,
    /// Exit with code 2 when the overall score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Source file; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,
    /// Language id; inferred from the file extension when omitted
    #[arg(short, long)]
    pub lang: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct ScanCommand {
    pub path: PathBuf,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
            ReportFormat::Sarif => OutputFormat::Sarif,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UiLocale {
    En,
    Zh,
}

impl From<UiLocale> for Locale {
    fn from(locale: UiLocale) -> Self {
        match locale {
            UiLocale::En => Locale::En,
            UiLocale::Zh => Locale::Zh,
        }
    }
}
