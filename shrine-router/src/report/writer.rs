//! Writing report files to disk.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::planner::{Diagnostic, RankedLine};

use super::error::ReportError;

/// Default name of the ranked route file.
const ROUTES_FILE: &str = "output.txt";

/// Default name of the diagnostic trace file.
const DEBUG_FILE: &str = "debug.log";

/// Configuration for report output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Directory the report files are written into.
    pub dir: PathBuf,
}

impl ReportConfig {
    /// Create a new report config writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the ranked route file.
    pub fn routes_path(&self) -> PathBuf {
        self.dir.join(ROUTES_FILE)
    }

    /// Path of the diagnostic trace file.
    pub fn debug_path(&self) -> PathBuf {
        self.dir.join(DEBUG_FILE)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new("out")
    }
}

/// Paths of the files a report was written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub routes: PathBuf,
    pub debug: PathBuf,
}

/// Writes ranked routes and diagnostics as line-oriented text files.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    config: ReportConfig,
}

impl ReportWriter {
    /// Create a new writer with the given config.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Write both report files, creating the output directory if needed.
    ///
    /// Lines are joined with `\n` and existing files are overwritten.
    pub fn write(
        &self,
        lines: &[RankedLine],
        diagnostics: &[Diagnostic],
    ) -> Result<ReportFiles, ReportError> {
        std::fs::create_dir_all(&self.config.dir).map_err(|source| ReportError::CreateDir {
            path: self.config.dir.clone(),
            source,
        })?;

        let files = ReportFiles {
            routes: self.config.routes_path(),
            debug: self.config.debug_path(),
        };

        write_lines(&files.routes, lines)?;
        write_lines(&files.debug, diagnostics)?;

        info!(
            routes = lines.len(),
            diagnostics = diagnostics.len(),
            dir = %self.config.dir.display(),
            "wrote report"
        );

        Ok(files)
    }
}

fn join_lines<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_lines<T: Display>(path: &Path, items: &[T]) -> Result<(), ReportError> {
    std::fs::write(path, join_lines(items)).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
