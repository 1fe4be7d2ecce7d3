use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{not_found, output_case};

/// Handle `vaka get`.
pub fn handle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.manager.get_case(id) {
        Some(case) => output_case(case, flags.format),
        None => {
            not_found(id);
            Ok(())
        }
    }
}
