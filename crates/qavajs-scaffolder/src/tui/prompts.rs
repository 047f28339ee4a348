//! Charm-style CLI prompts using cliclack

use crate::answers::ModuleSystem;
use crate::filesystem::LocalFilesystem;
use crate::product::ProductConfig;
use crate::prompt::{collect_answers, AnswerPreset, Prompter};
use crate::runtime::{check, CommandInstaller};
use crate::scaffold::{ScaffoldPlan, Scaffolder};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Module system, skipping the prompt
    pub module_system: Option<ModuleSystem>,

    /// Step modules, skipping the prompt
    pub steps: Option<Vec<String>>,

    /// Formatters, skipping the prompt
    pub formats: Option<Vec<String>>,

    /// Generate files without running the package manager
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

impl CreateArgs {
    fn preset(&self) -> AnswerPreset {
        AnswerPreset {
            module_system: self.module_system,
            steps: self.steps.clone(),
            formats: self.formats.clone(),
            accept_defaults: self.yes,
        }
    }
}

/// [`Prompter`] backed by cliclack select/multiselect
#[derive(Debug, Clone, Copy, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<String> {
        let mut select = cliclack::select(message);
        for choice in choices {
            select = select.item(choice.to_string(), choice, "");
        }
        Ok(select.interact()?)
    }

    fn multiselect(&mut self, message: &str, choices: &[&str]) -> Result<Vec<String>> {
        let mut multi = cliclack::multiselect(message);
        for choice in choices {
            multi = multi.item(choice.to_string(), choice, "");
        }
        Ok(multi.required(false).interact()?)
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Resolve the project directory
    let project_dir = select_directory(&args).await?;

    // Step 2: Collect answers (flags first, prompts for the rest)
    let mut prompter = CliclackPrompter;
    let answers = collect_answers(&mut prompter, &args.preset())?;

    let package_manager = config.package_manager();
    let scaffolder = Scaffolder::new(
        LocalFilesystem::new(&project_dir),
        CommandInstaller::new(&package_manager),
        &project_dir,
    )
    .with_package_manager(&package_manager);

    // Step 3: Validate selections before anything is written
    let plan = scaffolder.plan(&answers)?;
    if let Some(driver) = plan.driver {
        cliclack::log::info(format!("Browser driver: {}", driver.module()))?;
    }

    // Step 4: Write project files
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");
    if let Err(e) = scaffolder.generate(&plan).await {
        spinner.stop("Failed to create project");
        return Err(e);
    }
    spinner.stop(format!(
        "Created {} files in {}",
        plan.files().len(),
        scaffolder.project_dir().display()
    ));

    // Step 5: Install packages
    install_packages(&scaffolder, &plan, &package_manager, args.skip_install).await?;

    // Step 6: Show next steps
    print_next_steps(config, &project_dir, &plan)?;

    Ok(())
}

async fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let Some(dir) = &args.directory else {
        return Ok(current_dir);
    };

    let path = if dir.is_absolute() {
        dir.clone()
    } else {
        current_dir.join(dir)
    };
    if path.exists() && !path.is_dir() {
        anyhow::bail!("Not a directory: {}", path.display());
    }
    cliclack::log::info(format!("Using directory: {}", path.display()))?;

    if !path.exists() {
        tokio::fs::create_dir_all(&path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        return Ok(path);
    }

    // Warn if directory exists and has files
    let count = existing_entries(&path)?;
    if count > 0 {
        cliclack::log::warning(format!("Directory has {} existing items", count))?;

        let confirm = if args.yes {
            true
        } else {
            cliclack::confirm("Existing files may be overwritten. Continue anyway?")
                .initial_value(true)
                .interact()?
        };

        if !confirm {
            anyhow::bail!("Setup cancelled.");
        }
    }

    Ok(path)
}

/// Number of entries in an existing project directory
fn existing_entries(path: &Path) -> Result<usize> {
    if !path.is_dir() {
        anyhow::bail!("Not a directory: {}", path.display());
    }
    let entries = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read directory: {}", path.display()))?;
    Ok(entries.count())
}

async fn install_packages(
    scaffolder: &Scaffolder<LocalFilesystem, CommandInstaller>,
    plan: &ScaffoldPlan,
    package_manager: &str,
    skip_install: bool,
) -> Result<()> {
    cliclack::log::info(format!(
        "Packages to install:\n{}",
        plan.install_list.join("\n")
    ))?;

    if skip_install {
        cliclack::log::info("Skipping package installation")?;
        return Ok(());
    }

    let tool = check::check_tool(package_manager);
    if tool.available {
        cliclack::log::info(format!("Using {}", tool.describe()))?;
    } else {
        cliclack::log::warning(format!(
            "{} was not found in PATH; installation will likely fail",
            package_manager
        ))?;
    }

    let node = check::check_node();
    if !node.available {
        cliclack::log::warning("Node.js is not installed (install from https://nodejs.org)")?;
    }

    cliclack::log::info("Installing packages...")?;
    scaffolder.install(plan).await?;
    cliclack::log::success("Packages installed")?;

    Ok(())
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    plan: &ScaffoldPlan,
) -> Result<()> {
    let steps = config.next_steps(project_dir, plan.module_system);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy testing!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_entries_counts_items() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(existing_entries(dir.path()).unwrap(), 0);

        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::create_dir(dir.path().join("features")).unwrap();
        assert_eq!(existing_entries(dir.path()).unwrap(), 2);
    }

    #[test]
    fn test_regular_file_is_not_a_project_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "x").unwrap();

        let err = existing_entries(&file).unwrap_err();
        assert!(err.to_string().starts_with("Not a directory:"));
    }

    #[tokio::test]
    async fn test_directory_flag_pointing_at_file_fails_early() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.js");
        std::fs::write(&file, "module.exports = {}").unwrap();

        let args = CreateArgs {
            directory: Some(file.clone()),
            yes: true,
            ..Default::default()
        };
        let err = select_directory(&args).await.unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "module.exports = {}");
    }
}
