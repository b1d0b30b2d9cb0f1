use std::cell::RefCell;
use std::collections::VecDeque;

use esyt::config::apply_defaults;
use esyt::error::{Error, Result};
use esyt::flags::{parse_flags, Editor, Flags, Framework, Language};
use esyt::project::NextOptions;
use esyt::prompt::{project_name_error, resolve_project, sort_packages, Prompter};

#[derive(Debug)]
enum Answer {
    Select(usize),
    MultiSelect(Vec<usize>),
    Name(&'static str),
    Confirm(bool),
}

/// Answers prompts from a fixed script and records every question asked.
struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), asked: RefCell::new(Vec::new()) }
    }

    fn silent() -> Self {
        Self::new(Vec::new())
    }

    fn next(&self, prompt: &str) -> Answer {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected prompt: {prompt}"))
    }

    fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, items: &[&str], _default: usize) -> Result<usize> {
        match self.next(prompt) {
            Answer::Select(index) => {
                assert!(index < items.len());
                Ok(index)
            }
            other => panic!("Expected a select answer for {prompt}, got {other:?}"),
        }
    }

    fn multi_select(&self, prompt: &str, _items: &[&str]) -> Result<Vec<usize>> {
        match self.next(prompt) {
            Answer::MultiSelect(indices) => Ok(indices),
            other => panic!("Expected a multi-select answer for {prompt}, got {other:?}"),
        }
    }

    fn project_name(&self, prompt: &str, _default: &str) -> Result<String> {
        match self.next(prompt) {
            Answer::Name(name) => Ok(name.to_string()),
            other => panic!("Expected a name answer for {prompt}, got {other:?}"),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt) {
            Answer::Confirm(value) => Ok(value),
            other => panic!("Expected a confirm answer for {prompt}, got {other:?}"),
        }
    }
}

#[test]
fn test_complete_flags_ask_nothing() {
    let flags = parse_flags(["-vite", "-ts", "app", "--axios", "-git", "-i", "-zed", "-dev"]);
    let prompter = ScriptedPrompter::silent();
    let project = resolve_project(&prompter, &flags).unwrap();

    assert!(prompter.asked().is_empty());
    assert_eq!(project.framework, Framework::Vite);
    assert_eq!(project.language, Language::TypeScript);
    assert_eq!(project.name, "app");
    assert_eq!(project.packages, ["Axios"]);
    assert!(project.extra_packages.is_empty());
    assert!(project.git_init);
    assert!(project.install_deps);
    assert_eq!(project.editor, Editor::Zed);
    assert!(project.run_dev_server);
    assert_eq!(project.next, None);
    assert!(!project.dry_run);
}

#[test]
fn test_yes_asks_nothing() {
    let mut flags = parse_flags(["--yes", "--no-git", "-d"]);
    apply_defaults(&mut flags);
    let prompter = ScriptedPrompter::silent();
    let project = resolve_project(&prompter, &flags).unwrap();

    assert!(prompter.asked().is_empty());
    assert_eq!(project.name, "esyt-app");
    assert!(project.packages.is_empty());
    assert!(!project.git_init);
    assert_eq!(project.editor, Editor::None);
    assert!(project.run_dev_server);
    assert!(project.dry_run);
}

#[test]
fn test_yes_uses_default_next_options() {
    let mut flags = parse_flags(["--yes", "-next"]);
    apply_defaults(&mut flags);
    let project = resolve_project(&ScriptedPrompter::silent(), &flags).unwrap();
    assert_eq!(project.next, Some(NextOptions::default()));
}

#[test]
fn test_interactive_next_project() {
    let prompter = ScriptedPrompter::new(vec![
        Answer::Select(1),
        Answer::Select(1),
        Answer::Name("shop"),
        Answer::MultiSelect(vec![0, 8]),
        Answer::Confirm(true),
        Answer::Confirm(false),
        Answer::Select(2),
        Answer::Confirm(false),
        Answer::Confirm(true),
        Answer::Confirm(true),
        Answer::Confirm(false),
    ]);
    let project = resolve_project(&prompter, &Flags::default()).unwrap();

    assert!(prompter.is_exhausted());
    assert_eq!(project.framework, Framework::NextJs);
    assert_eq!(project.language, Language::TypeScript);
    assert_eq!(project.name, "shop");
    assert_eq!(project.packages, ["TailwindCSS", "Prisma"]);
    assert!(project.git_init);
    assert!(!project.install_deps);
    assert_eq!(project.editor, Editor::Cursor);
    assert!(!project.run_dev_server);
    assert_eq!(
        project.next,
        Some(NextOptions { eslint: false, src_dir: true, app_router: true, turbopack: false })
    );
}

#[test]
fn test_dev_server_is_only_asked_with_install() {
    let flags = parse_flags(["-vite", "-js", "app", "--axios", "-git", "--no-install", "-zed"]);
    let prompter = ScriptedPrompter::silent();
    let project = resolve_project(&prompter, &flags).unwrap();
    assert!(!project.run_dev_server);

    let flags = parse_flags(["-vite", "-js", "app", "--axios", "-git", "-i", "-zed"]);
    let prompter = ScriptedPrompter::new(vec![Answer::Confirm(false)]);
    let project = resolve_project(&prompter, &flags).unwrap();
    assert!(!project.run_dev_server);
    assert_eq!(prompter.asked().len(), 1);
}

#[test]
fn test_package_prompt_is_skipped_for_extra_packages() {
    let flags = parse_flags(["-vite", "-js", "app", "lodash", "-git", "-i", "-zed", "-dev"]);
    let prompter = ScriptedPrompter::silent();
    let project = resolve_project(&prompter, &flags).unwrap();

    assert!(project.packages.is_empty());
    assert_eq!(project.extra_packages, ["lodash"]);
}

#[test]
fn test_invalid_values_are_errors() {
    let mut flags = parse_flags(["app", "-git", "-i", "-zed", "-dev", "--axios", "-js"]);
    flags.framework = Some(Framework::from("Remix"));
    let result = resolve_project(&ScriptedPrompter::silent(), &flags);
    assert!(matches!(result, Err(Error::ValidationError(_))));

    let mut flags = parse_flags(["-vite", "-js", "-git", "-i", "-zed", "-dev", "--axios"]);
    flags.project_name = Some("two words".to_string());
    let result = resolve_project(&ScriptedPrompter::silent(), &flags);
    assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[test]
fn test_sort_packages() {
    let npm = ["tailwindcss", "lodash", "react-router", "react-router-dom"].map(String::from);

    let (labels, extras) = sort_packages(&npm, &Framework::Vite);
    assert_eq!(labels, ["TailwindCSS", "React Router"]);
    assert_eq!(extras, ["lodash"]);

    let (labels, extras) = sort_packages(&npm, &Framework::NextJs);
    assert_eq!(labels, ["TailwindCSS"]);
    assert_eq!(extras, ["lodash", "react-router", "react-router-dom"]);
}

#[test]
fn test_project_name_error() {
    assert_eq!(project_name_error("").as_deref(), Some("Project name is required."));
    assert_eq!(project_name_error("   ").as_deref(), Some("Project name is required."));
    assert!(project_name_error("My App").unwrap().contains("'my-app'"));
    assert_eq!(project_name_error("my-app"), None);
}
