use vaka_store::CaseUpdate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::commands::shared::parse::{parse_fields, parse_status};
use crate::context::AppContext;
use crate::output::{not_found, output_case};

/// Handle `vaka update`.
pub fn handle(args: &UpdateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(args)?;
    match ctx.manager.update_case(&args.id, update)? {
        Some(case) => output_case(case, flags.format),
        None => {
            not_found(&args.id);
            Ok(())
        }
    }
}

/// `--fields` first, then explicit flags on top.
fn build_update(args: &UpdateArgs) -> anyhow::Result<CaseUpdate> {
    let mut update = match &args.fields {
        Some(raw) => CaseUpdate::from_fields(&parse_fields(raw)?)?,
        None => CaseUpdate::default(),
    };

    if let Some(title) = &args.title {
        update.title = Some(title.clone());
    }
    if let Some(description) = &args.description {
        update.description = Some(description.clone());
    }
    if let Some(date_reported) = &args.date_reported {
        update.date_reported = Some(date_reported.clone());
    }
    if let Some(location) = &args.location {
        update.location = Some(location.clone());
    }
    if !args.evidence.is_empty() {
        update.evidence = Some(args.evidence.clone());
    }
    if let Some(status) = &args.status {
        update.status = Some(parse_status(status)?);
    }
    Ok(update)
}
