//! esyt's main application entry point and orchestration logic.
//! Interprets the command line, fills the gaps from a preset, defaults or
//! prompts, then creates the project.

use esyt::{
    config::{apply_defaults, load_preset},
    constants::LOG_ENV,
    error::{default_error_handler, Result},
    flags::parse_flags,
    help::informational_output,
    prompt::{resolve_project, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
    runner::{execute_plan, DryRunExecutor, Executor, SystemExecutor},
    scaffold::build_plan,
    validation::clear_invalid,
};
use log::{debug, warn};

/// Main application entry point.
fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_env(LOG_ENV)
        .init();

    let mut argv = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let program = argv.next().unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let program = std::path::Path::new(&program)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or(program);

    if let Err(err) = run(&program, argv.collect()) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Parses the arguments
/// 2. Handles help and version requests
/// 3. Fills absent fields from a preset file
/// 4. Clears fields validation rejects
/// 5. Applies `--yes` defaults
/// 6. Prompts for whatever is still missing
/// 7. Builds and executes the creation plan
fn run(program: &str, argv: Vec<String>) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let cwd = std::env::current_dir()?;

    let mut flags = parse_flags(&argv);
    debug!("Parsed flags: {flags:?}");

    if let Some(output) = informational_output(&flags, &renderer, program)? {
        print!("{output}");
        return Ok(());
    }

    if let Some(preset) = load_preset(&cwd)? {
        preset.apply_to(&mut flags);
    }

    for (field, reason) in clear_invalid(&mut flags) {
        warn!("Ignoring {reason} value for '{field}'; it will be asked for instead.");
    }

    if flags.yes == Some(true) {
        apply_defaults(&mut flags);
    }

    let prompt = DialoguerPrompter::new();
    let project = resolve_project(&prompt, &flags)?;
    debug!("Resolved project: {project:?}");

    let plan = build_plan(&project, &cwd, &renderer)?;
    debug!("Plan: {:?}", plan.commands());

    let executor: Box<dyn Executor> = if project.dry_run {
        Box::new(DryRunExecutor::new())
    } else {
        Box::new(SystemExecutor::new())
    };
    execute_plan(&plan, &*executor)?;

    println!("Project setup complete in {}.", plan.project_dir.display());
    Ok(())
}
