//! create-qavajs - Project scaffolding for qavajs test automation

mod logging;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use qavajs_scaffolder::catalog::{self, Category, ModuleDefinition};
use qavajs_scaffolder::templates::DOCS_URL;
use qavajs_scaffolder::tui::CreateArgs;
use qavajs_scaffolder::{ModuleSystem, ProductConfig};
use std::path::{Path, PathBuf};

/// qavajs product configuration
#[derive(Clone)]
pub struct QavajsConfig;

impl ProductConfig for QavajsConfig {
    fn name(&self) -> &'static str {
        "create-qavajs"
    }

    fn display_name(&self) -> &'static str {
        "qavajs"
    }

    fn docs_url(&self) -> &'static str {
        DOCS_URL
    }

    fn package_manager_env(&self) -> &'static str {
        "QAVAJS_PACKAGE_MANAGER"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding qavajs test-automation projects"
    }

    fn next_steps(&self, dir: &Path, module_system: ModuleSystem) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        steps.push(format!(
            "npx qavajs run --config {}",
            module_system.config_file()
        ));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-qavajs")]
#[command(version)]
pub struct Args {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new qavajs project (default)
    Create(CliCreateArgs),
    /// List every known module, grouped by category
    List,
    /// Open the qavajs documentation in a browser
    Docs,
}

#[derive(ClapArgs, Debug, Default)]
pub struct CliCreateArgs {
    /// Project directory (created if missing)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Module system: commonjs, esm or typescript
    #[arg(short, long)]
    pub module_system: Option<ModuleSystem>,

    /// Step modules (comma-separated, e.g. wdio,api)
    #[arg(short, long, value_delimiter = ',')]
    pub steps: Option<Vec<String>>,

    /// Formatters (comma-separated, e.g. html,console)
    #[arg(short, long, value_delimiter = ',')]
    pub formats: Option<Vec<String>>,

    /// Generate files without installing packages
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            directory: args.directory,
            module_system: args.module_system,
            steps: args.steps,
            formats: args.formats,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

fn describe_module(def: &ModuleDefinition) -> String {
    let mut line = format!("{:<16} {}", def.module, def.package_identifier());
    if let Some(out) = def.out {
        line.push_str(&format!(" -> {}", out));
    }
    line
}

fn list_modules() {
    for category in Category::ALL {
        println!("{}", category.display_name().bold());
        for def in catalog::modules(category) {
            println!("  {} {}", "●".blue(), describe_module(def));
        }
        println!();
    }
}

fn open_docs(config: &QavajsConfig) -> Result<()> {
    println!("{}", "Opening qavajs documentation in your browser...".cyan());
    open::that(config.docs_url())
        .with_context(|| format!("Failed to open {}", config.docs_url()))?;
    Ok(())
}

async fn create(config: &QavajsConfig, args: CliCreateArgs) -> Result<()> {
    let result = qavajs_scaffolder::run(config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = QavajsConfig;
    let matches = Args::command()
        .about(config.cli_description())
        .get_matches();
    let args = Args::from_arg_matches(&matches)?;
    logging::init_logging(args.verbose)?;

    tracing::debug!(product = config.name(), "starting");

    match args.command {
        Some(Command::Create(create_args)) => create(&config, create_args).await,
        Some(Command::List) => {
            list_modules();
            Ok(())
        }
        Some(Command::Docs) => open_docs(&config),
        // No subcommand provided, default to create behavior (interactive mode)
        None => create(&config, CliCreateArgs::default()).await,
    }
}
