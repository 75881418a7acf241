//! CLI entry point - the composition root.
//!
//! Parses arguments, wires the adapters via bootstrap, and dispatches
//! to the command handlers. Domain errors never terminate the process
//! from inside a component; they surface here and map to exit codes.

use clap::Parser;

use openwith_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::with_defaults().with_apps_dirs(cli.apps_dir.clone());
    let ctx = bootstrap(config);

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Set {
            suffix,
            app,
            no_recommend,
        } => handlers::set::execute(&ctx, &suffix, app, no_recommend).await?,
        Commands::Group { name, app } => handlers::group::execute(&ctx, &name, app).await?,
        Commands::Groups => handlers::groups::execute()?,
        Commands::Apps { json } => handlers::apps::execute(&ctx, json).await?,
        Commands::Recommend { suffix, json } => {
            handlers::recommend::execute(&ctx, &suffix, json).await?;
        }
        Commands::CheckDeps => {
            handlers::check_deps::execute(openwith_runtime::check_all_dependencies())?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
