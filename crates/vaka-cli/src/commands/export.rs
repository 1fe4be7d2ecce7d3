use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use vaka_core::entities::Case;
use vaka_export::{DocumentKind, DocumentSink, ExportError, HtmlFileSink, PrinterSink, render_case};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::commands::shared::parse::parse_kind;
use crate::context::AppContext;
use crate::output::{not_found, output};

#[derive(Debug, Serialize)]
struct ExportResponse {
    id: String,
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    printed: bool,
}

/// Where the rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    File(PathBuf),
    Printer,
}

/// Handle `vaka export`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(case) = ctx.manager.get_case(&args.id) else {
        not_found(&args.id);
        return Ok(());
    };

    let export = &ctx.config.export;
    let kind = parse_kind(args.kind.as_deref().unwrap_or(&export.default_kind))?;

    let (target, sink): (Target, Box<dyn DocumentSink>) = if args.print {
        let printer = args
            .printer
            .clone()
            .or_else(|| export.has_printer().then(|| export.printer.clone()));
        (Target::Printer, Box::new(PrinterSink::new(printer)))
    } else {
        let path = args
            .out
            .clone()
            .unwrap_or_else(|| default_output_file(&export.output_path(), case.id()));
        (Target::File(path), Box::new(HtmlFileSink))
    };

    let response = export_case(case, kind, &target, sink.as_ref(), Utc::now())?;
    output(&response, flags.format)
}

fn default_output_file(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{id}.html"))
}

fn export_case(
    case: &Case,
    kind: DocumentKind,
    target: &Target,
    sink: &dyn DocumentSink,
    generated_at: DateTime<Utc>,
) -> Result<ExportResponse, ExportError> {
    let html = render_case(case, kind, generated_at);
    let path = match target {
        Target::File(path) => Some(sink.render_to_file(&html, path)?),
        Target::Printer => {
            sink.send_to_printer(&html)?;
            None
        }
    };
    Ok(ExportResponse {
        id: case.id().to_string(),
        kind: kind.to_string(),
        printed: path.is_none(),
        path,
    })
}
