//! Common constants used throughout the esyt application.

/// Preset file names, tried in this order
pub const PRESET_FILES: [&str; 3] = ["esyt.json", "esyt.yml", "esyt.yaml"];

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "ESYT_LOG";

/// Project name used by `--yes` when none was given
pub const DEFAULT_PROJECT_NAME: &str = "esyt-app";

/// Validation reason for values outside a closed set of choices
pub const REASON_UNSUPPORTED: &str = "unsupported";

/// Validation reason for malformed values
pub const REASON_INVALID: &str = "invalid";

/// Answers piped into the Vite create tool, declining its own follow-up questions
pub const VITE_CREATE_INPUT: &str = "no\nno\n";

/// `.gitignore` written into a new repository that has none
pub const DEFAULT_GITIGNORE: &str = "\
# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*
lerna-debug.log*

# Dependencies
node_modules
*.local

# Editor directories and files
.vscode/*
!.vscode/extensions.json
.idea
.DS_Store
*.suo
*.ntvs*
*.njsproj
*.sln
*.sw?

# Environment variables
.env
.env.local
.env.development.local
.env.test.local
.env.production.local
";
