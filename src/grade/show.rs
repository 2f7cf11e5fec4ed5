#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tabled::{
    Table,
    settings::{
        Alignment, Modify, Panel, Style, Width,
        object::{Columns, Rows},
    },
};

use super::results::Report;

/// Wrap width for the message column.
const MESSAGE_WIDTH: usize = 56;

/// Renders `report` for a terminal.
///
/// * `pass_threshold`: percentage the verdict line is measured against
pub fn render_text(report: &Report, pass_threshold: f64) -> String {
    if !report.success {
        return format!("ERROR: {}", report.error.as_deref().unwrap_or("unknown error"));
    }

    let file_name = report
        .filepath
        .as_deref()
        .map(|p| {
            Path::new(p)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.to_owned())
        })
        .unwrap_or_default();

    let table = Table::new(&report.checks)
        .with(Modify::new(Columns::new(4..)).with(Width::wrap(MESSAGE_WIDTH).keep_words(true)))
        .with(Modify::new(Columns::new(1..4)).with(Alignment::center()))
        .with(Panel::header(format!("HW1 Autograder Report: {file_name}")))
        .with(Panel::footer(format!(
            "TOTAL: {:.1}/{:.1} ({:.1}%)",
            report.score,
            report.max_score,
            report.percentage_value()
        )))
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Modify::new(Rows::last()).with(Alignment::center()))
        .with(Style::modern())
        .to_string();

    let verdict = if report.passes(pass_threshold) {
        "PASS".green().bold()
    } else {
        "BELOW THRESHOLD".red().bold()
    };

    format!("{table}\n{verdict} (pass threshold {pass_threshold}%)")
}

/// Renders `report` as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize grading report")
}
