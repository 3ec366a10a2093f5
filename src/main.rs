mod cli;

use clap::Parser;
use codescore::error::{Result, ScoreError};
use codescore::language::LanguageId;
use codescore::report::{self, Locale, OutputFormat};
use codescore::types::config::ScoreConfig;
use codescore::{config, scan};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILED_CHECKS: i32 = 1;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

struct OutputSettings {
    format: OutputFormat,
    locale: Locale,
    fail_under: Option<u8>,
}

impl OutputSettings {
    fn resolve(args: &cli::OutputArgs, config: &ScoreConfig) -> Self {
        Self {
            format: args.format.map(Into::into).unwrap_or_else(|| config.format()),
            locale: args.locale.map(Into::into).unwrap_or_else(|| config.locale()),
            fail_under: args.fail_under.or_else(|| config.fail_under()),
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config_or_default(root: &Path) -> Result<ScoreConfig> {
    Ok(config::load_config(root)?.unwrap_or_default())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(ScoreError::PathNotFound(path.display().to_string()));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn gate(overall: Option<u8>, fail_under: Option<u8>, has_failures: bool) -> i32 {
    match (overall, fail_under) {
        (Some(overall), Some(threshold)) if overall < threshold => exit_code::BELOW_THRESHOLD,
        _ if has_failures => exit_code::FAILED_CHECKS,
        _ => exit_code::SUCCESS,
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let config = load_config_or_default(&std::env::current_dir()?)?;
            let settings = OutputSettings::resolve(&cmd.output, &config);

            let input = read_input(cmd.file.as_deref())?;
            let snippet = input.trim();
            if snippet.is_empty() {
                return Err(ScoreError::EmptyInput);
            }

            let language = match &cmd.lang {
                Some(lang) => LanguageId::resolve(lang),
                None => cmd
                    .file
                    .as_deref()
                    .and_then(|path| path.extension())
                    .and_then(|ext| ext.to_str())
                    .and_then(LanguageId::from_extension)
                    .unwrap_or_else(|| config.default_language()),
            };
            tracing::info!(%language, "analyzing snippet");

            let result = codescore::analyze_with(snippet, language);
            println!("{}", report::render(&result, settings.format, settings.locale)?);

            Ok(gate(
                Some(result.overall),
                settings.fail_under,
                result.has_failures(),
            ))
        }
        cli::Commands::Scan(cmd) => {
            if !cmd.path.exists() {
                return Err(ScoreError::PathNotFound(cmd.path.display().to_string()));
            }
            let config = load_config_or_default(&cmd.path)?;
            let settings = OutputSettings::resolve(&cmd.output, &config);

            let scan_report = scan::scan(&cmd.path)?;
            println!(
                "{}",
                report::render_scan(&scan_report, settings.format, settings.locale)?
            );

            let has_failures = scan_report
                .files
                .iter()
                .any(|file| file.result.has_failures());
            Ok(gate(scan_report.overall, settings.fail_under, has_failures))
        }
        cli::Commands::Languages => {
            for language in LanguageId::ALL {
                if language == LanguageId::DEFAULT {
                    println!("{language} (default)");
                } else {
                    println!("{language}");
                }
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
