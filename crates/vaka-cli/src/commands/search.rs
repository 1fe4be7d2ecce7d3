use vaka_core::responses::SearchResponse;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_cases};

/// Handle `vaka search`.
pub fn handle(query: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let cases = ctx.manager.search_cases(query);
    match flags.format {
        OutputFormat::Table => {
            if !flags.quiet {
                println!("{} result(s) for '{query}'", cases.len());
            }
            output_cases(&cases, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(
            &SearchResponse {
                query: query.to_string(),
                total_results: cases.len(),
                results: cases.into_iter().cloned().collect(),
            },
            flags.format,
        ),
    }
}
