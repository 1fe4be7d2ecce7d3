use serde_json::{Map, Value};
use vaka_core::enums::CaseStatus;
use vaka_export::DocumentKind;

/// Parse status text (any accepted spelling) with a CLI-friendly error.
pub fn parse_status(raw: &str) -> anyhow::Result<CaseStatus> {
    raw.parse::<CaseStatus>()
        .map_err(|error| anyhow::anyhow!("invalid status '{raw}': {error}"))
}

pub fn parse_kind(raw: &str) -> anyhow::Result<DocumentKind> {
    raw.parse::<DocumentKind>()
        .map_err(|error| anyhow::anyhow!("invalid document kind '{raw}': {error}"))
}

/// Parse a `--fields` argument; it must be a JSON object.
pub fn parse_fields(raw: &str) -> anyhow::Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => anyhow::bail!("--fields must be a JSON object"),
        Err(error) => anyhow::bail!("--fields is not valid JSON: {error}"),
    }
}
