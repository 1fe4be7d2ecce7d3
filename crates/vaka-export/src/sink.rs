//! Document sinks: where rendered HTML goes.

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ExportError;

/// Destination for a rendered HTML document.
pub trait DocumentSink {
    /// Write `html` to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if the directory or file cannot be written.
    fn render_to_file(&self, html: &str, path: &Path) -> Result<PathBuf, ExportError> {
        write_html(html, path)?;
        tracing::info!("Exported document to {}", path.display());
        Ok(path.to_path_buf())
    }

    /// Submit `html` as a print job.
    ///
    /// # Errors
    ///
    /// Returns an `ExportError` if the job cannot be submitted.
    fn send_to_printer(&self, html: &str) -> Result<(), ExportError>;
}

fn write_html(html: &str, path: &Path) -> Result<(), ExportError> {
    let io = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(io)?;
    }
    std::fs::write(path, html).map_err(io)
}

/// Writes HTML files only.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFileSink;

impl DocumentSink for HtmlFileSink {
    fn send_to_printer(&self, _html: &str) -> Result<(), ExportError> {
        Err(ExportError::Unsupported(
            "the HTML file sink cannot print; use the printer sink",
        ))
    }
}

/// Submits documents to the system print queue with `lp`.
#[derive(Debug, Clone)]
pub struct PrinterSink {
    program: String,
    printer: Option<String>,
}

impl Default for PrinterSink {
    fn default() -> Self {
        Self::new(None)
    }
}

impl PrinterSink {
    /// Print through `lp`, to `printer` or the system default when `None`
    /// (or empty).
    #[must_use]
    pub fn new(printer: Option<String>) -> Self {
        Self {
            program: "lp".to_string(),
            printer: printer.filter(|name| !name.trim().is_empty()),
        }
    }

    /// Use a different print program with the same arguments as `lp`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    #[must_use]
    pub fn printer(&self) -> Option<&str> {
        self.printer.as_deref()
    }

    /// Arguments passed to the print program for `file`.
    #[must_use]
    pub fn args(&self, file: &Path) -> Vec<String> {
        let mut args = Vec::with_capacity(3);
        if let Some(printer) = &self.printer {
            args.push("-d".to_string());
            args.push(printer.clone());
        }
        args.push(file.display().to_string());
        args
    }
}

impl DocumentSink for PrinterSink {
    fn send_to_printer(&self, html: &str) -> Result<(), ExportError> {
        let mut file = tempfile::Builder::new()
            .prefix("vaka-print-")
            .suffix(".html")
            .tempfile()
            .map_err(|source| ExportError::Io {
                path: std::env::temp_dir(),
                source,
            })?;
        file.write_all(html.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| ExportError::Io {
                path: file.path().to_path_buf(),
                source,
            })?;

        let output = Command::new(&self.program)
            .args(self.args(file.path()))
            .output()
            .map_err(|source| ExportError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExportError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::info!(
            "Sent document to printer {}",
            self.printer.as_deref().unwrap_or("(default)")
        );
        Ok(())
    }
}

/// Printer names reported by `lpstat -p`.
///
/// # Errors
///
/// Returns `ExportError::Spawn` if `lpstat` cannot be run.
pub fn list_printers() -> Result<Vec<String>, ExportError> {
    let output = Command::new("lpstat")
        .arg("-p")
        .output()
        .map_err(|source| ExportError::Spawn {
            program: "lpstat".to_string(),
            source,
        })?;
    Ok(parse_lpstat(&String::from_utf8_lossy(&output.stdout)))
}

/// Extract printer names from `lpstat -p` output
/// (`printer <name> is idle.  enabled since ...`).
fn parse_lpstat(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| {
            let mut words = line.split_whitespace();
            (words.next() == Some("printer"))
                .then(|| words.next())
                .flatten()
                .map(str::to_string)
        })
        .collect()
}
