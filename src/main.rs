//! Resume screener: skill and experience extraction with a heuristic fit score

use anyhow::Context;
use clap::Parser;
use log::error;
use resume_screener::cli::{self, Cli};
use resume_screener::config::Config;
use resume_screener::output::ReportGenerator;
use resume_screener::processing::{LexiconTagger, ResumeAnalyzer};
use resume_screener::{ScreeningOutcome, ScreeningPipeline};
use std::io::{self, Write};
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        error!("Screening failed: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let format = match &cli.output {
        Some(format) => cli::parse_output_format(format).map_err(anyhow::Error::msg)?,
        None => config.output.format,
    };
    let use_colors = config.output.color_output && !cli.no_color;

    // The tagger is built once and lives for the whole run.
    let analyzer = ResumeAnalyzer::with_keywords(
        LexiconTagger::new(),
        config.analysis.experience_keywords.clone(),
    )?;
    let pipeline = ScreeningPipeline::new(analyzer);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    let request = cli.collect_request(&mut input, &mut out)?;

    match pipeline.run(&request, &mut out)? {
        ScreeningOutcome::Completed(report) => {
            let rendered = ReportGenerator::new(use_colors).generate_report(&report, format)?;
            write!(out, "{}", rendered)?;
            out.flush()?;
        }
        ScreeningOutcome::Halted(_) => {}
    }

    Ok(())
}
