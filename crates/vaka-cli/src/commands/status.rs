use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_status;
use crate::context::AppContext;
use crate::output::{not_found, output_case};

/// Handle `vaka status`.
pub fn handle(
    id: &str,
    status: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_status(status)?;
    match ctx.manager.change_status(id, status)? {
        Some(case) => output_case(case, flags.format),
        None => {
            not_found(id);
            Ok(())
        }
    }
}
