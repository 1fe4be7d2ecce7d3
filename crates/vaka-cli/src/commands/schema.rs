use schemars::schema_for;
use vaka_core::entities::{Case, UpdateEntry};
use vaka_core::responses::StatusCounts;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `vaka schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(&args.type_name)?;
    output(&schema, flags.format)
}

fn schema_value(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name.replace('_', "-").as_str() {
        "case" => schema_for!(Case),
        "update-entry" | "update" => schema_for!(UpdateEntry),
        "status-counts" | "stats" => schema_for!(StatusCounts),
        other => anyhow::bail!(
            "unknown schema type '{other}' (expected case, update-entry or status-counts)"
        ),
    };
    Ok(serde_json::to_value(schema)?)
}
