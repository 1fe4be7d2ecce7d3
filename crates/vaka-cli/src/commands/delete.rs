use vaka_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{not_found, output};

/// Handle `vaka delete`.
pub fn handle(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.manager.delete_case(id) {
        not_found(id);
        return Ok(());
    }
    output(
        &DeleteResponse {
            id: id.to_string(),
            deleted: true,
        },
        flags.format,
    )
}
