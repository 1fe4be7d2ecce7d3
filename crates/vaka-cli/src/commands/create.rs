use vaka_core::entities::NewCase;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::context::AppContext;
use crate::output::output_case;

/// Handle `vaka create`.
pub fn handle(args: &CreateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut input = NewCase::new(&args.title, &args.description, &args.date_reported)
        .evidence(args.evidence.iter().cloned());
    if let Some(location) = &args.location {
        input = input.location(location);
    }

    let case = ctx.manager.create_case(input);
    output_case(case, flags.format)
}
