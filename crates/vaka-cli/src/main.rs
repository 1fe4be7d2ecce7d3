use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;
mod write_lock;

fn main() {
    if let Err(error) = run() {
        eprintln!("vaka error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    if let cli::Commands::Schema(args) = &cli.command {
        let flags = cli.global_flags(cli::OutputFormat::Json);
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config()?;
    let flags = cli.global_flags(cli::OutputFormat::from_config(
        &config.general.default_format,
    ));
    ui::init(&flags);

    if let cli::Commands::Printers = &cli.command {
        return commands::printers::handle(&flags);
    }

    let data_path = bootstrap::data_path(&flags, &config);
    let command = cli.command;
    let write_lock = if command.mutates() {
        Some(write_lock::acquire_for_snapshot(&data_path)?)
    } else {
        None
    };

    let mut ctx = context::AppContext::init(data_path, config);
    tracing::debug!(
        "Loaded {} cases from {}",
        ctx.manager.len(),
        ctx.data_path.display()
    );

    let result = commands::dispatch::dispatch(command, &mut ctx, &flags);
    drop(write_lock);
    result
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("VAKA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
