//! Order-independent interpretation of command-line tokens.
//!
//! Every token is matched against an ordered table of rules; the first rule
//! that matches consumes the token. Parsing never fails: tokens nothing else
//! recognizes end up as the project name or as extra packages.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Framework the generated project is built on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Framework {
    Vite,
    NextJs,
    /// A value from an external source that esyt cannot scaffold.
    Unsupported(String),
}

impl Framework {
    pub const CHOICES: [Framework; 2] = [Framework::Vite, Framework::NextJs];

    pub fn is_supported(&self) -> bool {
        !matches!(self, Framework::Unsupported(_))
    }

    pub fn label(&self) -> &str {
        match self {
            Framework::Vite => "Vite",
            Framework::NextJs => "Next.js",
            Framework::Unsupported(value) => value,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Framework {
    fn from(value: &str) -> Self {
        match value {
            "Vite" => Framework::Vite,
            "Next.js" | "NextJS" => Framework::NextJs,
            other => Framework::Unsupported(other.to_string()),
        }
    }
}

/// Source language of the generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    TypeScript,
    /// A value from an external source that esyt cannot scaffold.
    Unsupported(String),
}

impl Language {
    pub const CHOICES: [Language; 2] = [Language::JavaScript, Language::TypeScript];

    pub fn is_supported(&self) -> bool {
        !matches!(self, Language::Unsupported(_))
    }

    pub fn label(&self) -> &str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Unsupported(value) => value,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        match value {
            "JavaScript" => Language::JavaScript,
            "TypeScript" => Language::TypeScript,
            other => Language::Unsupported(other.to_string()),
        }
    }
}

/// Editor opened once the project is ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Editor {
    Zed,
    VsCode,
    Cursor,
    Trae,
    /// Do not open an editor.
    None,
    /// A value from an external source that esyt cannot launch.
    Unsupported(String),
}

impl Editor {
    pub const CHOICES: [Editor; 5] =
        [Editor::Zed, Editor::VsCode, Editor::Cursor, Editor::Trae, Editor::None];

    pub fn is_supported(&self) -> bool {
        !matches!(self, Editor::Unsupported(_))
    }

    pub fn label(&self) -> &str {
        match self {
            Editor::Zed => "Zed",
            Editor::VsCode => "VSCode",
            Editor::Cursor => "Cursor",
            Editor::Trae => "Trae",
            Editor::None => "None",
            Editor::Unsupported(value) => value,
        }
    }

    /// Executable that opens a directory in this editor.
    pub fn command(&self) -> Option<&'static str> {
        match self {
            Editor::Zed => Some("zed"),
            Editor::VsCode => Some("code"),
            Editor::Cursor => Some("cursor"),
            Editor::Trae => Some("trae"),
            Editor::None | Editor::Unsupported(_) => None,
        }
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Editor {
    fn from(value: &str) -> Self {
        match value {
            "Zed" => Editor::Zed,
            "VSCode" => Editor::VsCode,
            "Cursor" => Editor::Cursor,
            "Trae" => Editor::Trae,
            "None" => Editor::None,
            other => Editor::Unsupported(other.to_string()),
        }
    }
}

/// Configuration collected from the command line.
///
/// `None` on a tri-state field means "not specified, ask interactively",
/// which is different from an explicit `Some(false)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub framework: Option<Framework>,
    pub language: Option<Language>,
    pub project_name: Option<String>,
    packages: Vec<String>,
    npm_packages: Vec<String>,
    pub git_init: Option<bool>,
    pub install_deps: Option<bool>,
    pub selected_ide: Option<Editor>,
    pub run_dev_server: Option<bool>,
    pub help: bool,
    pub version: bool,
    pub yes: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Flags {
    /// Package tokens exactly as they were given.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Installable package ids, `npm_packages()[i]` being `packages()[i]` without its dashes.
    pub fn npm_packages(&self) -> &[String] {
        &self.npm_packages
    }

    /// Records a package token, keeping both package lists aligned.
    pub fn push_package(&mut self, raw: &str) {
        self.packages.push(raw.to_string());
        self.npm_packages.push(strip_dashes(raw).to_string());
    }
}

/// Removes one leading `--`, or else one leading `-`.
pub fn strip_dashes(token: &str) -> &str {
    token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token)
}

pub const HELP_TOKENS: [&str; 3] = ["-h", "--help", "help"];
pub const VERSION_TOKENS: [&str; 3] = ["-v", "--version", "version"];
pub const YES_TOKENS: [&str; 3] = ["--yes", "-y", "--no-interactive"];
pub const DRY_RUN_TOKENS: [&str; 2] = ["--dry-run", "-d"];
pub const VITE_TOKENS: [&str; 3] = ["-vite", "--vite", "vite"];
pub const NEXT_TOKENS: [&str; 3] = ["-next", "--next", "next"];
pub const JAVASCRIPT_TOKENS: [&str; 6] =
    ["-js", "--js", "js", "-javascript", "--javascript", "javascript"];
pub const TYPESCRIPT_TOKENS: [&str; 6] =
    ["-ts", "--ts", "ts", "-typescript", "--typescript", "typescript"];
pub const GIT_TOKEN: &str = "-git";
pub const PLACEHOLDER_TOKEN: &str = "-";
pub const INSTALL_TOKENS: [&str; 3] = ["-i", "-install", "--install"];
pub const EDITOR_TOKENS: [(&str, Editor); 4] = [
    ("-zed", Editor::Zed),
    ("-code", Editor::VsCode),
    ("-cursor", Editor::Cursor),
    ("-trae", Editor::Trae),
];
pub const DEV_TOKEN: &str = "-dev";

/// `--no-interactive` looks like a negation but belongs to [`YES_TOKENS`].
const NON_INTERACTIVE_TOKEN: &str = "--no-interactive";

static NEGATION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--?no-").expect("negation prefix pattern is valid"));

/// Every exact token form the rule table recognizes.
pub fn literal_tokens() -> Vec<&'static str> {
    let mut tokens = Vec::new();
    tokens.extend(HELP_TOKENS);
    tokens.extend(VERSION_TOKENS);
    tokens.extend(YES_TOKENS);
    tokens.extend(DRY_RUN_TOKENS);
    tokens.extend(VITE_TOKENS);
    tokens.extend(NEXT_TOKENS);
    tokens.extend(JAVASCRIPT_TOKENS);
    tokens.extend(TYPESCRIPT_TOKENS);
    tokens.push(GIT_TOKEN);
    tokens.push(PLACEHOLDER_TOKEN);
    tokens.extend(INSTALL_TOKENS);
    tokens.extend(EDITOR_TOKENS.iter().map(|(token, _)| *token));
    tokens.push(DEV_TOKEN);
    tokens
}

/// Identifies which rule of the table consumes a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Negation,
    Help,
    Version,
    NonInteractive,
    DryRun,
    Framework,
    Language,
    GitEnable,
    Placeholder,
    InstallEnable,
    Editor,
    DevServer,
    Package,
    Positional,
}

struct Rule {
    kind: RuleKind,
    matches: fn(&str) -> bool,
    apply: fn(&mut Flags, &str),
}

/// Rules in priority order. A token that matches none of them is handled by [`POSITIONAL`].
static RULES: [Rule; 13] = [
    Rule { kind: RuleKind::Negation, matches: is_negation, apply: apply_negation },
    Rule {
        kind: RuleKind::Help,
        matches: |t| one_of(&HELP_TOKENS, t),
        apply: |flags, _| flags.help = true,
    },
    Rule {
        kind: RuleKind::Version,
        matches: |t| one_of(&VERSION_TOKENS, t),
        apply: |flags, _| flags.version = true,
    },
    Rule {
        kind: RuleKind::NonInteractive,
        matches: |t| one_of(&YES_TOKENS, t),
        apply: |flags, _| flags.yes = Some(true),
    },
    Rule {
        kind: RuleKind::DryRun,
        matches: |t| one_of(&DRY_RUN_TOKENS, t),
        apply: |flags, _| flags.dry_run = Some(true),
    },
    Rule {
        kind: RuleKind::Framework,
        matches: |t| one_of(&VITE_TOKENS, t) || one_of(&NEXT_TOKENS, t),
        apply: |flags, t| {
            flags.framework = Some(if one_of(&VITE_TOKENS, t) {
                Framework::Vite
            } else {
                Framework::NextJs
            })
        },
    },
    Rule {
        kind: RuleKind::Language,
        matches: |t| one_of(&JAVASCRIPT_TOKENS, t) || one_of(&TYPESCRIPT_TOKENS, t),
        apply: |flags, t| {
            flags.language = Some(if one_of(&JAVASCRIPT_TOKENS, t) {
                Language::JavaScript
            } else {
                Language::TypeScript
            })
        },
    },
    Rule {
        kind: RuleKind::GitEnable,
        matches: |t| t == GIT_TOKEN,
        apply: |flags, _| flags.git_init = Some(true),
    },
    Rule { kind: RuleKind::Placeholder, matches: |t| t == PLACEHOLDER_TOKEN, apply: |_, _| {} },
    Rule {
        kind: RuleKind::InstallEnable,
        matches: |t| one_of(&INSTALL_TOKENS, t),
        apply: |flags, _| flags.install_deps = Some(true),
    },
    Rule {
        kind: RuleKind::Editor,
        matches: |t| EDITOR_TOKENS.iter().any(|(token, _)| *token == t),
        apply: |flags, t| {
            flags.selected_ide =
                EDITOR_TOKENS.iter().find(|(token, _)| *token == t).map(|(_, e)| e.clone())
        },
    },
    Rule {
        kind: RuleKind::DevServer,
        matches: |t| t == DEV_TOKEN,
        apply: |flags, _| flags.run_dev_server = Some(true),
    },
    Rule {
        kind: RuleKind::Package,
        matches: |t| t.starts_with("--") || (t.starts_with('-') && t.chars().count() > 2),
        apply: |flags, t| flags.push_package(t),
    },
];

static POSITIONAL: Rule =
    Rule { kind: RuleKind::Positional, matches: |_| true, apply: apply_positional };

fn one_of(tokens: &[&str], token: &str) -> bool {
    tokens.iter().any(|candidate| *candidate == token)
}

fn is_negation(token: &str) -> bool {
    token != NON_INTERACTIVE_TOKEN && NEGATION_PREFIX.is_match(token)
}

fn apply_negation(flags: &mut Flags, token: &str) {
    let key = NEGATION_PREFIX.find(token).map_or(token, |m| &token[m.end()..]);
    match key {
        "git" => flags.git_init = Some(false),
        "install" | "i" => flags.install_deps = Some(false),
        "dev" => flags.run_dev_server = Some(false),
        "editor" | "ide" => flags.selected_ide = Some(Editor::None),
        // Unknown negations are consumed without effect.
        _ => {}
    }
}

fn apply_positional(flags: &mut Flags, token: &str) {
    if flags.project_name.is_none() {
        // A name with whitespace is dropped so the prompt asks for a valid one.
        if !token.chars().any(char::is_whitespace) {
            flags.project_name = Some(token.to_string());
        }
        return;
    }
    flags.push_package(token);
}

fn rule_for(token: &str) -> &'static Rule {
    RULES.iter().find(|rule| (rule.matches)(token)).unwrap_or(&POSITIONAL)
}

/// Returns the rule that consumes `token`.
pub fn classify(token: &str) -> RuleKind {
    rule_for(token).kind
}

/// Parses command-line tokens (program name excluded) into [`Flags`].
///
/// Never fails: malformed input leaves the affected field unset.
///
/// # Example
/// ```
/// use esyt::flags::{parse_flags, Framework};
///
/// let flags = parse_flags(["my-app", "--next", "--tailwindcss"]);
/// assert_eq!(flags.framework, Some(Framework::NextJs));
/// assert_eq!(flags.project_name.as_deref(), Some("my-app"));
/// assert_eq!(flags.npm_packages(), ["tailwindcss"]);
/// ```
pub fn parse_flags<I, S>(argv: I) -> Flags
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut flags = Flags::default();
    for token in argv {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }
        (rule_for(token).apply)(&mut flags, token);
    }
    flags
}
