use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `vaka printers`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let printers = vaka_export::list_printers()?;
    output(&printers, flags.format)
}
