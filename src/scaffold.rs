//! Turns a resolved [`Project`] into the ordered list of actions that create it.

use crate::constants::VITE_CREATE_INPUT;
use crate::error::{Error, Result};
use crate::flags::{Framework, Language};
use crate::packages::install_spec;
use crate::project::{NextOptions, Project};
use crate::renderer::TemplateRenderer;
use log::warn;
use std::fmt;
use std::path::{Path, PathBuf};

pub const VITE_CREATE: &str = "npm create vite@latest {{ name }} -- --template {{ template }}";
pub const NEXT_CREATE: &str = "npx create-next-app@latest {{ name }} {{ options | join(' ') }}";
pub const INSTALL: &str = "npm i";
pub const ADD: &str = "npm i {{ packages | join(' ') }}";
pub const ADD_DEV: &str = "npm i -D {{ packages | join(' ') }}";
pub const PACKAGE_RUNNER: &str = "npx {{ args }}";
pub const OPEN_EDITOR: &str = "{{ editor }} .";
pub const DEV_SERVER: &str = "npm run dev";

/// A shell command and where to run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub command: String,
    pub dir: PathBuf,
    /// Written to the command's stdin, which is otherwise inherited.
    pub input: Option<String>,
    /// A failed required step aborts the run; other failures are reported and skipped.
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run(Step),
    /// Initialize a git repository in the directory.
    InitGit(PathBuf),
    /// Remove a `.git` directory the create tool may have left behind.
    RemoveGitDir(PathBuf),
}

impl Action {
    pub fn is_required(&self) -> bool {
        match self {
            Action::Run(step) => step.required,
            Action::InitGit(_) | Action::RemoveGitDir(_) => false,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Run(step) => f.write_str(&step.command),
            Action::InitGit(_) => f.write_str("git init"),
            Action::RemoveGitDir(_) => f.write_str("rm -rf .git"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub project_dir: PathBuf,
    pub actions: Vec<Action>,
}

impl Plan {
    /// Command lines of the plan, in order.
    pub fn commands(&self) -> Vec<String> {
        self.actions.iter().map(ToString::to_string).collect()
    }
}

fn vite_template(language: &Language) -> &'static str {
    match language {
        Language::TypeScript => "react-ts",
        _ => "react",
    }
}

/// Arguments handed to `create-next-app`.
pub fn next_arguments(project: &Project, options: &NextOptions) -> Vec<&'static str> {
    let mut arguments = vec![match project.language {
        Language::TypeScript => "--ts",
        _ => "--js",
    }];
    arguments.push(if options.eslint { "--eslint" } else { "--no-eslint" });
    let tailwind = project.has_package("TailwindCSS");
    arguments.push(if tailwind { "--tailwind" } else { "--no-tailwind" });
    arguments.push(if options.src_dir { "--src-dir" } else { "--no-src-dir" });
    arguments.push(if options.app_router { "--app" } else { "--no-app" });
    if options.turbopack {
        arguments.push("--turbopack");
        arguments.push("--import-alias \"@/*\"");
    }
    arguments
}

struct PlanBuilder<'a> {
    renderer: &'a dyn TemplateRenderer,
    project_dir: PathBuf,
    actions: Vec<Action>,
}

impl PlanBuilder<'_> {
    /// Adds a best-effort step run inside the project directory.
    fn push(&mut self, command: String) {
        self.actions.push(Action::Run(Step {
            command,
            dir: self.project_dir.clone(),
            input: None,
            required: false,
        }));
    }

    /// Renders `template` and adds it as a best-effort step.
    fn run(&mut self, template: &str, context: serde_json::Value) -> Result<()> {
        let command = self.renderer.render(template, &context)?;
        self.push(command);
        Ok(())
    }
}

/// Builds the plan for `project`, created as a subdirectory of `cwd`.
///
/// Order: create, install, packages, git, editor, dev server. Package
/// installs only happen together with the install step.
///
/// # Errors
/// * `Error::ValidationError` if the framework or language is unsupported
/// * `Error::MinijinjaError` if a command template fails to render
pub fn build_plan(
    project: &Project,
    cwd: &Path,
    renderer: &dyn TemplateRenderer,
) -> Result<Plan> {
    if !project.language.is_supported() {
        return Err(Error::ValidationError(format!(
            "unsupported language '{}'",
            project.language
        )));
    }

    let create = match &project.framework {
        Framework::Vite => Step {
            command: renderer.render(
                VITE_CREATE,
                &serde_json::json!({
                    "name": project.name,
                    "template": vite_template(&project.language),
                }),
            )?,
            dir: cwd.to_path_buf(),
            input: Some(VITE_CREATE_INPUT.to_string()),
            required: true,
        },
        Framework::NextJs => Step {
            command: renderer.render(
                NEXT_CREATE,
                &serde_json::json!({
                    "name": project.name,
                    "options": next_arguments(project, &project.next.unwrap_or_default()),
                }),
            )?,
            dir: cwd.to_path_buf(),
            input: None,
            required: true,
        },
        Framework::Unsupported(framework) => {
            return Err(Error::ValidationError(format!(
                "unsupported framework '{framework}'"
            )));
        }
    };

    let mut builder = PlanBuilder {
        renderer,
        project_dir: cwd.join(&project.name),
        actions: vec![Action::Run(create)],
    };

    if project.install_deps {
        builder.push(INSTALL.to_string());

        for label in &project.packages {
            let Some(spec) = install_spec(label, &project.framework) else {
                warn!("No install spec for '{}' on {}, skipping", label, project.framework);
                continue;
            };
            if !spec.dev_dependencies.is_empty() {
                let context = serde_json::json!({ "packages": spec.dev_dependencies });
                builder.run(ADD_DEV, context)?;
            }
            if !spec.dependencies.is_empty() {
                builder.run(ADD, serde_json::json!({ "packages": spec.dependencies }))?;
            }
            if let Some(args) = spec.init {
                builder.run(PACKAGE_RUNNER, serde_json::json!({ "args": args }))?;
            }
        }

        for package in &project.extra_packages {
            builder.run(ADD, serde_json::json!({ "packages": [package] }))?;
        }
    }

    let git_action = if project.git_init {
        Action::InitGit(builder.project_dir.clone())
    } else {
        Action::RemoveGitDir(builder.project_dir.clone())
    };
    builder.actions.push(git_action);

    if let Some(editor) = project.editor.command() {
        builder.run(OPEN_EDITOR, serde_json::json!({ "editor": editor }))?;
    }

    if project.run_dev_server {
        builder.push(DEV_SERVER.to_string());
    }

    Ok(Plan { project_dir: builder.project_dir, actions: builder.actions })
}
