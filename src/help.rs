//! Usage text printed for `-h`, `--help` and `help`.
//!
//! Lists every token form [`crate::flags`] recognizes; keep both in sync.

use crate::error::Result;
use crate::flags::Flags;
use crate::renderer::TemplateRenderer;

pub const HELP_TEMPLATE: &str = r#"
{{ program }} {{ version }}

Usage: {{ program }} [framework] [language] [projectName] [packages...] [options]

Positional / brief
    projectName                First non-dash token is treated as the project name (no spaces).
                               Example: {{ program }} my-app

Framework / language
    -vite, --vite, vite        Create a Vite project
    -next, --next, next        Create a Next.js project
    -js, --js, js              Use JavaScript (also -javascript, --javascript, javascript)
    -ts, --ts, ts              Use TypeScript (also -typescript, --typescript, typescript)

Packages
    Any token starting with -- or a single - followed by more than one character
    is treated as a package token.
    Examples: --tailwindcss  -tailwindcss  --dotenv  -dotenv
    Unknown package tokens are installed as npm packages verbatim.

Install / Git / Editor / Dev
    -git                       Initialize a git repository
    -i, -install, --install    Run the install command after creation
    -dev                       Run the development server after install
    -zed, -code, -cursor, -trae
                               Open the project in Zed, VSCode, Cursor or Trae
    -                          Placeholder, ignored

Negations (explicit overrides)
    --no-git, -no-git          Disable git init
    --no-install, -no-install, --no-i, -no-i
                               Disable the install step
    --no-dev, -no-dev          Disable the development server
    --no-editor, -no-editor, --no-ide, -no-ide
                               Do not open an editor
    Only these --no-... names are handled. Other --no-... tokens are ignored.

Automation / testing
    --yes, -y, --no-interactive
                               Accept defaults and skip prompts (non-interactive).
                               Explicit flags such as --no-git still win over the defaults.
    --dry-run, -d              Print the commands that would run without executing them.

Help / version
    -h, --help, help           Print this help text and exit
    -v, --version, version     Print the version and exit

Presets
    Values for anything not given on the command line are read from esyt.json,
    esyt.yml or esyt.yaml in the current directory when present.

Environment
    ESYT_LOG                   Log filter (error, warn, info, debug, trace)
"#;

/// Renders the usage text for `program`.
pub fn render_help(renderer: &dyn TemplateRenderer, program: &str) -> Result<String> {
    let context = serde_json::json!({
        "program": program,
        "version": env!("CARGO_PKG_VERSION"),
    });
    renderer.render(HELP_TEMPLATE, &context)
}

/// Output of a help or version request, which ends the run before anything
/// else is read. Help wins when both were asked for.
///
/// # Returns
/// * `Result<Option<String>>` - `None` when neither was requested
pub fn informational_output(
    flags: &Flags,
    renderer: &dyn TemplateRenderer,
    program: &str,
) -> Result<Option<String>> {
    if flags.help {
        return render_help(renderer, program).map(Some);
    }
    if flags.version {
        return Ok(Some(format!("{}\n", env!("CARGO_PKG_VERSION"))));
    }
    Ok(None)
}
