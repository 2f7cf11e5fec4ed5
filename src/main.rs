#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # stmx-grade
//!
//! Grades a Stella carbon-cycle model against the HW1 rubric.
//!
//! `stmx-grade model.stmx` prints a table of every check; `--json` prints the
//! structured report instead. The exit status is 0 only when the model parses
//! and scores at or above the pass threshold (60% unless `STMX_PASS_THRESHOLD`
//! says otherwise). Given a directory, the most recently modified submission
//! in it is graded.

use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use bpaf::*;
use dotenvy::dotenv;
use stmx_grader::{
    config, find_submission,
    grade::{grade_file, render_json, render_text},
};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Parsed command line.
#[derive(Debug, Clone)]
struct Options {
    /// Print the report as JSON.
    json: bool,
    /// Model file, or a directory to pick the submission from.
    path: PathBuf,
}

/// Parse the command line arguments and return the options
fn options() -> OptionParser<Options> {
    let json = short('j')
        .long("json")
        .help("Output results as JSON")
        .switch();
    let path =
        positional::<PathBuf>("PATH").help("Path to .stmx file, or a directory containing one");

    construct!(Options { json, path })
        .to_options()
        .descr("Autograder for HW1 Terrestrial Carbon Cycle Model")
}

fn main() -> Result<ExitCode> {
    dotenv().ok();
    let config = config::ensure_initialized()?;

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(config.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let opts = options().run();

    if !opts.path.exists() {
        println!("Error: File not found: {}", opts.path.display());
        return Ok(ExitCode::FAILURE);
    }

    let file = if opts.path.is_dir() {
        match find_submission(&opts.path, config.extension(), config.template_marker()) {
            Ok(file) => file,
            Err(e) => {
                println!("Error: {e}");
                return Ok(ExitCode::FAILURE);
            }
        }
    } else {
        opts.path
    };

    let report = grade_file(&file);
    let threshold = config.pass_threshold();

    if opts.json {
        println!("{}", render_json(&report)?);
    } else {
        println!("{}", render_text(&report, threshold));
    }

    Ok(if report.passes(threshold) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
