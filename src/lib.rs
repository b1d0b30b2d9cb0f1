//! esyt scaffolds Vite and Next.js projects.
//! It interprets a free-form argument list, asks for whatever is missing and
//! drives the framework create tools and npm to produce the project.

/// Preset files and non-interactive defaults
/// Supports JSON and YAML formats (esyt.json, esyt.yml, esyt.yaml)
pub mod config;

/// Constants shared across modules
pub mod constants;

/// Error types and handling for the esyt application
pub mod error;

/// Command-line token interpretation
pub mod flags;

/// Git repository setup
pub mod git;

/// Usage text
pub mod help;

/// Well-known packages and what they install
pub mod packages;

/// Resolved project description
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Template rendering for command lines and help text
pub mod renderer;

/// Plan execution, real or dry run
pub mod runner;

/// Project creation plan
pub mod scaffold;

/// Re-checking of configuration records
pub mod validation;
