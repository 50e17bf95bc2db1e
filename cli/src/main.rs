use anyhow::Result;
use clap::{Parser, Subcommand};
use edsetup_core::{SettingsDocument, SettingsStatus, config};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
mod setup;

#[derive(Parser)]
#[command(name = "edsetup", version)]
#[command(about = "edsetup - Write the project's VS Code settings", long_about = None)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .vscode/settings.json next to the executable (default)
    Write,
    /// Print the settings document without writing it
    Show,
    /// Compare the settings file next to the executable with the expected document
    Check,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let document = SettingsDocument::default();
    let mut stdout = std::io::stdout().lock();

    match cli.command.unwrap_or(Commands::Write) {
        Commands::Write => {
            let base_dir = config::get_program_dir()?;
            setup::run_setup(&base_dir, &document, &mut stdout).map_err(|e| {
                eprintln!("❌ Setup failed: {:#}", e);
                e
            })?;
        }
        Commands::Show => {
            setup::run_show(&document, &mut stdout)?;
        }
        Commands::Check => {
            let base_dir = config::get_program_dir()?;
            let status = setup::run_check(&base_dir, &document, &mut stdout)?;
            if status != SettingsStatus::UpToDate {
                anyhow::bail!("Settings need to be rewritten. Run 'edsetup' to fix them.");
            }
        }
    }

    Ok(())
}
