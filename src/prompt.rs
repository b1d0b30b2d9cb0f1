//! Interactive collection of everything the command line left open.

use crate::constants::DEFAULT_PROJECT_NAME;
use crate::error::{Error, Result};
use crate::flags::{Editor, Flags, Framework, Language};
use crate::packages::{choices, install_spec, label_for};
use crate::project::{NextOptions, Project};
use crate::validation::is_valid_project_name;
use cruet::Inflector;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use log::debug;

/// Source of answers for the questions esyt asks.
pub trait Prompter {
    /// Picks one item, returning its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Picks any number of items, returning their indices.
    fn multi_select(&self, prompt: &str, items: &[&str]) -> Result<Vec<usize>>;

    /// Asks for a project name, re-asking until it is valid.
    fn project_name(&self, prompt: &str, default: &str) -> Result<String>;

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

/// Explains why `value` is not a usable project name.
pub fn project_name_error(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Project name is required.".to_string())
    } else if !is_valid_project_name(value) {
        Some(format!(
            "Project name cannot contain spaces. Try '{}'.",
            value.trim().to_kebab_case()
        ))
    } else {
        None
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn multi_select(&self, prompt: &str, items: &[&str]) -> Result<Vec<usize>> {
        MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn project_name(&self, prompt: &str, default: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .validate_with(|value: &String| -> std::result::Result<(), String> {
                match project_name_error(value) {
                    Some(message) => Err(message),
                    None => Ok(()),
                }
            })
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

fn select_choice<T: Clone + std::fmt::Display>(
    prompt: &dyn Prompter,
    message: &str,
    options: &[T],
    default: usize,
) -> Result<T> {
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let items: Vec<&str> = labels.iter().map(String::as_str).collect();
    let index = prompt.select(message, &items, default)?;
    options
        .get(index)
        .cloned()
        .ok_or_else(|| Error::PromptError(format!("no choice at position {index}")))
}

/// Splits flag-supplied npm ids into well-known labels and verbatim installs.
pub fn sort_packages(
    npm_packages: &[String],
    framework: &Framework,
) -> (Vec<String>, Vec<String>) {
    let mut labels = Vec::new();
    let mut extras = Vec::new();
    for npm_id in npm_packages {
        match label_for(npm_id) {
            Some(label) if install_spec(label, framework).is_some() => {
                if !labels.iter().any(|selected| selected == label) {
                    labels.push(label.to_string());
                }
            }
            _ => extras.push(npm_id.clone()),
        }
    }
    (labels, extras)
}

/// Resolves every absent field of `flags`, asking `prompt` where needed.
///
/// Under `--yes` only the package selection is skipped; the remaining
/// fields are expected to hold defaults already.
///
/// # Errors
/// * `Error::ValidationError` if a field still holds a value validation rejects
/// * `Error::PromptError` if a prompt cannot be shown or answered
pub fn resolve_project(prompt: &dyn Prompter, flags: &Flags) -> Result<Project> {
    let non_interactive = flags.yes == Some(true);

    let framework = match &flags.framework {
        Some(framework) => framework.clone(),
        None => select_choice(
            prompt,
            "Which framework would you like to use?",
            &Framework::CHOICES,
            0,
        )?,
    };
    if !framework.is_supported() {
        return Err(Error::ValidationError(format!("unsupported framework '{framework}'")));
    }

    let language = match &flags.language {
        Some(language) => language.clone(),
        None => select_choice(
            prompt,
            "Will you be using JavaScript or TypeScript?",
            &Language::CHOICES,
            0,
        )?,
    };
    if !language.is_supported() {
        return Err(Error::ValidationError(format!("unsupported language '{language}'")));
    }

    let name = match &flags.project_name {
        Some(name) if is_valid_project_name(name) => name.clone(),
        Some(name) => {
            return Err(Error::ValidationError(format!("invalid project name '{name}'")));
        }
        None => {
            prompt.project_name("What will your project be called?", DEFAULT_PROJECT_NAME)?
        }
    };

    let (mut packages, extra_packages) = sort_packages(flags.npm_packages(), &framework);
    if packages.is_empty() && extra_packages.is_empty() && !non_interactive {
        let offered = choices(&framework);
        let picked =
            prompt.multi_select("Which packages would you like to enable?", offered)?;
        packages = picked
            .into_iter()
            .filter_map(|index| offered.get(index).map(|label| label.to_string()))
            .collect();
    }
    debug!("Packages: {packages:?}, extra packages: {extra_packages:?}");

    let git_init = match flags.git_init {
        Some(git_init) => git_init,
        None => prompt.confirm("Initialize a new git repository?", false)?,
    };
    let install_deps = match flags.install_deps {
        Some(install_deps) => install_deps,
        None => prompt.confirm("Would you like us to run 'npm i'?", true)?,
    };

    let editor = match &flags.selected_ide {
        Some(editor) => editor.clone(),
        None => {
            let default = Editor::CHOICES.len() - 1;
            select_choice(
                prompt,
                "Which IDE would you like to open your project with?",
                &Editor::CHOICES,
                default,
            )?
        }
    };
    if !editor.is_supported() {
        return Err(Error::ValidationError(format!("unsupported editor '{editor}'")));
    }

    let run_dev_server = match flags.run_dev_server {
        Some(run_dev_server) => run_dev_server,
        None if install_deps => prompt.confirm(
            "Would you like to run the development server automatically after setup?",
            true,
        )?,
        None => false,
    };

    let next = match framework {
        Framework::NextJs if non_interactive => Some(NextOptions::default()),
        Framework::NextJs => Some(ask_next_options(prompt)?),
        _ => None,
    };

    Ok(Project {
        framework,
        language,
        name,
        packages,
        extra_packages,
        git_init,
        install_deps,
        editor,
        run_dev_server,
        next,
        dry_run: flags.dry_run == Some(true),
    })
}

fn ask_next_options(prompt: &dyn Prompter) -> Result<NextOptions> {
    let defaults = NextOptions::default();
    Ok(NextOptions {
        eslint: prompt.confirm("Would you like to use ESLint?", defaults.eslint)?,
        src_dir: prompt
            .confirm("Would you like your code inside a 'src/' directory?", defaults.src_dir)?,
        app_router: prompt
            .confirm("Would you like to use App Router? (recommended)", defaults.app_router)?,
        turbopack: prompt
            .confirm("Would you like to use Turbopack for 'next dev'?", defaults.turbopack)?,
    })
}
