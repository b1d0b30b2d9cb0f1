//! Carries out a [`Plan`], for real or as a dry run.

use crate::error::{Error, Result};
use crate::git::{init_repository, remove_git_dir};
use crate::scaffold::{Action, Plan, Step};
use log::{info, warn};
use std::cell::RefCell;
use std::io::Write;
use std::process::{Command, Stdio};

/// Executes a single plan action.
pub trait Executor {
    fn execute(&self, action: &Action) -> Result<()>;
}

/// Runs commands through the system shell and sets up git with libgit2.
#[derive(Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut shell = Command::new("cmd");
    shell.arg("/C").arg(command);
    shell
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut shell = Command::new("sh");
    shell.arg("-c").arg(command);
    shell
}

/// Runs a step, waiting for it to finish.
///
/// # Errors
/// * `Error::IoError` if the command cannot be spawned or fed its input
/// * `Error::CommandError` if the command exits unsuccessfully
pub fn run_step(step: &Step) -> Result<()> {
    let stdin = if step.input.is_some() { Stdio::piped() } else { Stdio::inherit() };

    let mut child = shell(&step.command)
        .current_dir(&step.dir)
        .stdin(stdin)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(Error::IoError)?;

    if let (Some(input), Some(mut child_stdin)) = (&step.input, child.stdin.take()) {
        child_stdin.write_all(input.as_bytes()).map_err(Error::IoError)?;
    }

    let status = child.wait().map_err(Error::IoError)?;
    if !status.success() {
        return Err(Error::CommandError {
            command: step.command.clone(),
            status: status.to_string(),
        });
    }

    Ok(())
}

impl Executor for SystemExecutor {
    fn execute(&self, action: &Action) -> Result<()> {
        match action {
            Action::Run(step) => run_step(step),
            Action::InitGit(dir) => init_repository(dir).map(|_| ()),
            Action::RemoveGitDir(dir) => remove_git_dir(dir).map(|_| ()),
        }
    }
}

/// Prints every action instead of executing it.
///
/// `.git` removal is only printed when there is a `.git` directory to remove.
#[derive(Default)]
pub struct DryRunExecutor {
    lines: RefCell<Vec<String>>,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines printed so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Executor for DryRunExecutor {
    fn execute(&self, action: &Action) -> Result<()> {
        if let Action::RemoveGitDir(dir) = action {
            if !dir.join(".git").is_dir() {
                return Ok(());
            }
        }
        let line = format!("[dry-run] {action}");
        println!("{line}");
        self.lines.borrow_mut().push(line);
        Ok(())
    }
}

/// Executes `plan` in order.
///
/// Required actions abort the run on failure; the others are logged and skipped.
pub fn execute_plan(plan: &Plan, executor: &dyn Executor) -> Result<()> {
    for action in &plan.actions {
        info!("Running: {action}");
        match executor.execute(action) {
            Ok(()) => {}
            Err(err) if action.is_required() => return Err(err),
            Err(err) => warn!("{err}"),
        }
    }
    Ok(())
}
