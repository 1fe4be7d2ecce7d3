//! # vaka-export
//!
//! Turns a case into a print-ready HTML document and hands it to a
//! [`DocumentSink`]: a file on disk ([`HtmlFileSink`]) or the system print
//! queue ([`PrinterSink`], via `lp`).
//!
//! Rendering is pure. Only [`PrinterSink`] and [`list_printers`] spawn
//! processes.

pub mod error;
pub mod kind;
pub mod render;
pub mod sink;

pub use error::ExportError;
pub use kind::DocumentKind;
pub use render::{escape_html, format_for_printing, render_case};
pub use sink::{DocumentSink, HtmlFileSink, PrinterSink, list_printers};
