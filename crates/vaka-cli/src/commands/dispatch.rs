use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Create(args) => commands::create::handle(&args, ctx, flags),
        Commands::Get { id } => commands::get::handle(&id, ctx, flags),
        Commands::List(args) => commands::list::handle(&args, ctx, flags),
        Commands::Search { query } => commands::search::handle(&query, ctx, flags),
        Commands::Note { id, text } => commands::note::handle(&id, &text, ctx, flags),
        Commands::Status { id, status } => commands::status::handle(&id, &status, ctx, flags),
        Commands::Update(args) => commands::update::handle(&args, ctx, flags),
        Commands::Delete { id } => commands::delete::handle(&id, ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Menu => commands::menu::handle(ctx),
        Commands::Demo(args) => commands::demo::handle(&args, ctx, flags),
        Commands::Printers | Commands::Schema(_) => {
            unreachable!("printers/schema are pre-dispatched in main")
        }
    }
}
