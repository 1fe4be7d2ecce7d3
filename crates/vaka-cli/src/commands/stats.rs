use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vaka stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.manager.status_counts(), flags.format)
}
