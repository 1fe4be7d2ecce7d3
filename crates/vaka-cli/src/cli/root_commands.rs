use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Open a new case.
    Create(CreateArgs),
    /// Show one case.
    Get { id: String },
    /// List cases, newest first.
    List(ListArgs),
    /// Search title, description and location.
    Search { query: String },
    /// Append a note to a case's update log.
    Note { id: String, text: String },
    /// Change a case's status (open, under_investigation, closed).
    Status { id: String, status: String },
    /// Edit case fields.
    Update(UpdateArgs),
    /// Delete a case.
    Delete { id: String },
    /// Case counts per status.
    Stats,
    /// Export a case as a print-ready HTML document.
    Export(ExportArgs),
    /// List printers known to the print system.
    Printers,
    /// Interactive menu.
    Menu,
    /// Seed sample cases and show statistics.
    Demo(DemoArgs),
    /// Print the JSON Schema of a case record.
    Schema(SchemaArgs),
}

impl Commands {
    /// Whether the command writes the snapshot and so must hold the write lock.
    #[must_use]
    pub const fn mutates(&self) -> bool {
        match self {
            Self::Create(_)
            | Self::Note { .. }
            | Self::Status { .. }
            | Self::Update(_)
            | Self::Delete { .. }
            | Self::Menu
            | Self::Demo(_) => true,
            Self::Get { .. }
            | Self::List(_)
            | Self::Search { .. }
            | Self::Stats
            | Self::Export(_)
            | Self::Printers
            | Self::Schema(_) => false,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    /// Date the case was reported (kept verbatim, e.g. 2026-01-10)
    #[arg(long = "date")]
    pub date_reported: String,
    #[arg(long)]
    pub location: Option<String>,
    /// Evidence item; repeat for several
    #[arg(long)]
    pub evidence: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Only cases with this status
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long = "date")]
    pub date_reported: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Replace the evidence list; repeat for several items
    #[arg(long)]
    pub evidence: Vec<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// JSON object of field updates, e.g. '{"location": "Ankara"}'.
    /// Unknown keys are ignored; explicit flags win over the same key here.
    #[arg(long)]
    pub fields: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    pub id: String,
    /// decision, indictment or document (defaults to export.default_kind)
    #[arg(long)]
    pub kind: Option<String>,
    /// Output file (defaults to <export.output_dir>/<id>.html)
    #[arg(long, conflicts_with = "print")]
    pub out: Option<PathBuf>,
    /// Send to the printer instead of writing a file
    #[arg(long)]
    pub print: bool,
    /// Printer name (defaults to export.printer, then the system default)
    #[arg(long, requires = "print")]
    pub printer: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DemoArgs {
    /// Seed even when the snapshot already holds cases
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// case, update-entry or status-counts
    #[arg(default_value = "case")]
    pub type_name: String,
}
