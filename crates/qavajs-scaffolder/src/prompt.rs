//! Prompt seam and answer collection

use crate::answers::{Answers, ModuleSystem};
use crate::catalog::{self, FORMATS, STEPS};
use anyhow::Result;

/// Single- and multi-choice selection over labeled values
pub trait Prompter {
    /// Pick exactly one of `choices`
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<String>;

    /// Pick any subset of `choices` (possibly empty)
    fn multiselect(&mut self, message: &str, choices: &[&str]) -> Result<Vec<String>>;
}

/// Answers supplied up front; anything left `None` is prompted for
#[derive(Debug, Clone, Default)]
pub struct AnswerPreset {
    pub module_system: Option<ModuleSystem>,
    pub steps: Option<Vec<String>>,
    pub formats: Option<Vec<String>>,
    /// Use defaults instead of prompting (CommonJS, nothing selected)
    pub accept_defaults: bool,
}

/// Collect module system, step modules and formatters, in that order
pub fn collect_answers<P: Prompter>(prompter: &mut P, preset: &AnswerPreset) -> Result<Answers> {
    let module_system = match preset.module_system {
        Some(system) => system,
        None if preset.accept_defaults => ModuleSystem::default(),
        None => {
            let labels: Vec<&str> = ModuleSystem::ALL.iter().map(|m| m.label()).collect();
            let label = prompter.select("select module system you want to use:", &labels)?;
            label.parse::<ModuleSystem>()?
        }
    };

    let steps = match &preset.steps {
        Some(steps) => steps.clone(),
        None if preset.accept_defaults => Vec::new(),
        None => prompter.multiselect(
            "select step packages to install:",
            &catalog::choices(STEPS),
        )?,
    };

    let formats = match &preset.formats {
        Some(formats) => formats.clone(),
        None if preset.accept_defaults => Vec::new(),
        None => prompter.multiselect(
            "select formatters (reporters) to install:",
            &catalog::choices(FORMATS),
        )?,
    };

    tracing::debug!(%module_system, ?steps, ?formats, "answers collected");

    Ok(Answers {
        module_system,
        steps,
        formats,
    })
}
