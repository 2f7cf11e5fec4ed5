#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Picks the file to grade out of a student's working directory.

use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};

use glob::glob;
use thiserror::Error;

/// Reasons no submission could be chosen.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The search root is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// No file with the expected extension exists.
    #[error("No .{extension} file found in {}", dir.display())]
    NoSubmission {
        /// Directory that was searched.
        dir:       PathBuf,
        /// Extension that was searched for.
        extension: String,
    },
    /// The search pattern could not be built.
    #[error("Could not create glob: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Returns the most recently modified `*.{extension}` file directly inside
/// `dir`.
///
/// Files whose name contains `template_marker` (case-insensitive) are the
/// unedited starter and are skipped, unless they are the only candidates.
pub fn find_submission(
    dir: &Path,
    extension: &str,
    template_marker: &str,
) -> Result<PathBuf, SubmissionError> {
    if !dir.is_dir() {
        return Err(SubmissionError::NotADirectory(dir.to_path_buf()));
    }

    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{escaped}/*.{extension}");
    let candidates: Vec<PathBuf> = glob(&pattern)?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    let marker = template_marker.to_lowercase();
    let (submissions, templates): (Vec<PathBuf>, Vec<PathBuf>) =
        candidates.into_iter().partition(|p| {
            marker.is_empty()
                || !p
                    .file_name()
                    .map(|name| name.to_string_lossy().to_lowercase().contains(&marker))
                    .unwrap_or(false)
        });
    let pool = if submissions.is_empty() {
        templates
    } else {
        submissions
    };

    let chosen = pool
        .into_iter()
        .max_by_key(|p| modified(p))
        .ok_or_else(|| SubmissionError::NoSubmission {
            dir:       dir.to_path_buf(),
            extension: extension.to_owned(),
        })?;

    tracing::info!("Grading: {}", chosen.display());
    Ok(chosen)
}

/// Last modification time, or the epoch when the platform cannot say.
fn modified(path: &Path) -> SystemTime {
    path.metadata()
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
