//! CLI entrypoint for multiedit
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use multiedit_application::DecomposeInstructionUseCase;
use multiedit_infrastructure::{ConfigLoader, FileConfig, JiebaTagger};
use multiedit_presentation::{Cli, ConsoleFormatter, OutputFormatter};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {issue}");
        }
        bail!("invalid configuration ({} problem(s))", issues.len());
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let vocabulary = config
        .build_vocabulary()
        .context("failed to build vocabulary")?;

    let mut decomposer_config = config.decomposer_config();
    if cli.no_fallback {
        decomposer_config.pos_fallback = false;
    }

    let tagger = JiebaTagger::new(&vocabulary);
    let use_case = DecomposeInstructionUseCase::new(tagger, vocabulary, decomposer_config)
        .context("failed to build decomposer")?;
    info!("Decomposer ready");

    let format = cli.output_format(config.output.format);
    let formatter = ConsoleFormatter;
    let mut stdout = io::stdout().lock();

    let mut run = |instruction: &str| -> Result<()> {
        let report = use_case.generate_report(instruction);
        debug!("{} operation(s) for {:?}", report.operations.len(), instruction);
        stdout.write_all(formatter.format(&report, format).as_bytes())?;
        Ok(())
    };

    if cli.instructions.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            run(&line)?;
        }
    } else {
        for instruction in &cli.instructions {
            run(instruction)?;
        }
    }

    Ok(())
}
