mod cmd;
mod output;
mod store;

use clap::{Parser, Subcommand};
use cmd::template::TemplateSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "actab",
    about = "Actuator template manager — import pasted tables, store templates, expand them into spreadsheet rows",
    version,
    propagate_version = true
)]
struct Cli {
    /// Template store directory (default: ./templates)
    #[arg(long, global = true, env = "ACTAB_DIR")]
    dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a pasted table block into actuator records
    Import {
        /// File with the pasted text (omit to read stdin)
        file: Option<PathBuf>,

        /// Save the parsed records as a template with this name
        #[arg(long)]
        save: Option<String>,

        /// Template description (with --save)
        #[arg(long)]
        description: Option<String>,
    },

    /// Manage stored templates
    Template {
        #[command(subcommand)]
        subcommand: TemplateSubcommand,
    },

    /// Expand a template into output rows for one or more actuators
    Expand {
        /// Template name
        #[arg(long)]
        template: String,

        /// Actuator instance as NUMBER:NAME (e.g. 30:AxisZ); repeatable
        #[arg(long = "actuator", required = true)]
        actuators: Vec<String>,

        /// Write tab-separated rows to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Omit the header row
        #[arg(long)]
        no_header: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let dir = store::resolve_dir(cli.dir.as_deref());

    let result = match cli.command {
        Commands::Import {
            file,
            save,
            description,
        } => cmd::import::run(
            &dir,
            file.as_deref(),
            save.as_deref(),
            description.as_deref(),
            cli.json,
        ),
        Commands::Template { subcommand } => cmd::template::run(&dir, subcommand, cli.json),
        Commands::Expand {
            template,
            actuators,
            out,
            no_header,
        } => cmd::expand::run(
            &dir,
            &template,
            &actuators,
            out.as_deref(),
            no_header,
            cli.json,
        ),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
