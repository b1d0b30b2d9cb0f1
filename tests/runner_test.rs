use std::cell::RefCell;
use std::path::PathBuf;

use esyt::error::{Error, Result};
use esyt::constants::DEFAULT_GITIGNORE;
use esyt::git::{init_repository, remove_git_dir, write_default_gitignore};
use esyt::runner::{execute_plan, run_step, DryRunExecutor, Executor};
use esyt::scaffold::{Action, Plan, Step};
use tempfile::TempDir;

fn step(command: &str, required: bool) -> Action {
    Action::Run(Step {
        command: command.to_string(),
        dir: PathBuf::from("."),
        input: None,
        required,
    })
}

fn plan(actions: Vec<Action>) -> Plan {
    Plan { project_dir: PathBuf::from("app"), actions }
}

/// Fails every command containing "fail" and records what it ran.
#[derive(Default)]
struct FailingExecutor {
    ran: RefCell<Vec<String>>,
}

impl Executor for FailingExecutor {
    fn execute(&self, action: &Action) -> Result<()> {
        let line = action.to_string();
        self.ran.borrow_mut().push(line.clone());
        if line.contains("fail") {
            return Err(Error::CommandError { command: line, status: "exit status: 1".to_string() });
        }
        Ok(())
    }
}

#[test]
fn test_dry_run_records_every_action() {
    let executor = DryRunExecutor::new();
    let plan = plan(vec![
        step("npm create vite@latest app -- --template react", true),
        step("npm i", false),
        Action::InitGit(PathBuf::from("app")),
    ]);
    execute_plan(&plan, &executor).unwrap();

    assert_eq!(
        executor.lines(),
        [
            "[dry-run] npm create vite@latest app -- --template react",
            "[dry-run] npm i",
            "[dry-run] git init",
        ]
    );
}

#[test_log::test]
fn test_best_effort_failures_are_skipped() {
    let executor = FailingExecutor::default();
    let plan = plan(vec![step("create", true), step("fail install", false), step("code .", false)]);

    assert!(execute_plan(&plan, &executor).is_ok());
    assert_eq!(*executor.ran.borrow(), ["create", "fail install", "code ."]);
}

#[test]
fn test_required_failure_stops_the_run() {
    let executor = FailingExecutor::default();
    let plan = plan(vec![step("fail create", true), step("npm i", false)]);

    let result = execute_plan(&plan, &executor);
    assert!(matches!(result, Err(Error::CommandError { .. })));
    assert_eq!(*executor.ran.borrow(), ["fail create"]);
}

#[cfg(not(windows))]
#[test]
fn test_run_step_reports_exit_status() {
    let temp_dir = TempDir::new().unwrap();
    let ok = Step {
        command: "true".to_string(),
        dir: temp_dir.path().to_path_buf(),
        input: None,
        required: true,
    };
    assert!(run_step(&ok).is_ok());

    let failing = Step { command: "exit 3".to_string(), ..ok };
    match run_step(&failing) {
        Err(Error::CommandError { command, .. }) => assert_eq!(command, "exit 3"),
        other => panic!("Expected CommandError, got {other:?}"),
    }
}

#[cfg(not(windows))]
#[test]
fn test_run_step_feeds_input_and_uses_dir() {
    let temp_dir = TempDir::new().unwrap();
    let step = Step {
        command: "read answer && echo \"$answer\" > answer.txt".to_string(),
        dir: temp_dir.path().to_path_buf(),
        input: Some("no\n".to_string()),
        required: true,
    };
    run_step(&step).unwrap();

    let written = std::fs::read_to_string(temp_dir.path().join("answer.txt")).unwrap();
    assert_eq!(written, "no\n");
}

#[test]
fn test_git_init_and_removal() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path().join("app");

    let repo = init_repository(&project_dir).unwrap();
    assert!(!repo.is_bare());
    assert!(project_dir.join(".git").is_dir());
    let gitignore = std::fs::read_to_string(project_dir.join(".gitignore")).unwrap();
    assert_eq!(gitignore, DEFAULT_GITIGNORE);

    assert!(remove_git_dir(&project_dir).unwrap());
    assert!(!project_dir.join(".git").exists());
    assert!(!remove_git_dir(&project_dir).unwrap());
}

#[test]
fn test_existing_gitignore_is_kept() {
    let temp_dir = TempDir::new().unwrap();
    let gitignore = temp_dir.path().join(".gitignore");
    std::fs::write(&gitignore, "dist\n").unwrap();

    init_repository(temp_dir.path()).unwrap();
    assert_eq!(std::fs::read_to_string(&gitignore).unwrap(), "dist\n");
    assert!(!write_default_gitignore(temp_dir.path()).unwrap());
}

#[test]
fn test_dry_run_skips_removal_without_git_dir() {
    let temp_dir = TempDir::new().unwrap();
    let executor = DryRunExecutor::new();
    let removal = plan(vec![Action::RemoveGitDir(temp_dir.path().join("app"))]);

    execute_plan(&removal, &executor).unwrap();
    assert!(executor.lines().is_empty());

    std::fs::create_dir_all(temp_dir.path().join("app").join(".git")).unwrap();
    execute_plan(&removal, &executor).unwrap();
    assert_eq!(executor.lines(), ["[dry-run] rm -rf .git"]);
    assert!(temp_dir.path().join("app").join(".git").is_dir());
}
