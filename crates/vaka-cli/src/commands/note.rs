use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{not_found, output_case};

/// Handle `vaka note`.
pub fn handle(
    id: &str,
    text: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match ctx.manager.add_update(id, text) {
        Some(case) => output_case(case, flags.format),
        None => {
            not_found(id);
            Ok(())
        }
    }
}
