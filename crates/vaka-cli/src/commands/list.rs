use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::parse::parse_status;
use crate::context::AppContext;
use crate::output::output_cases;

/// Handle `vaka list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = args.status.as_deref().map(parse_status).transpose()?;
    let cases = ctx.manager.list_cases(status);
    output_cases(&cases, flags.format)
}
