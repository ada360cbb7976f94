use clap::Parser;
use passmaster::cli::commands::add::SecretSource;
use passmaster::cli::{output, Cli, Commands, Context};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; `PASSMASTER_LOG=debug` shows vault I/O.
    let filter = EnvFilter::try_from_env("PASSMASTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> passmaster::Result<()> {
    use passmaster::cli::commands;

    // Commands that never touch the vault skip config loading.
    match cli.command {
        Commands::Strength { ref password } => return commands::strength::execute(password.as_deref()),
        Commands::Completions { shell } => return commands::completions::execute(shell),
        _ => {}
    }

    let ctx = Context::load(cli)?;

    match cli.command {
        Commands::Init => commands::init::execute(&ctx),
        Commands::Add {
            ref identifier,
            ref memo,
            ref secret,
            generate,
            ref policy,
            copy,
        } => {
            let source = match secret {
                Some(v) => SecretSource::Inline(v),
                None if generate => SecretSource::Generate(policy),
                None => SecretSource::Input,
            };
            commands::add::execute(&ctx, identifier, memo, source, copy)
        }
        Commands::List { ref filter } => commands::list::execute(&ctx, filter.as_deref()),
        Commands::Show { ref id, copy } => commands::show::execute(&ctx, id, copy),
        Commands::Remove { ref id, force } => commands::remove::execute(&ctx, id, force),
        Commands::Generate { ref policy, copy } => commands::generate::execute(&ctx, policy, copy),
        Commands::Audit { last, ref since } => {
            commands::audit_cmd::execute(&ctx, last, since.as_deref())
        }
        Commands::Strength { .. } | Commands::Completions { .. } => Ok(()),
    }
}
