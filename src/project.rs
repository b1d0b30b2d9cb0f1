//! The fully resolved description of the project to scaffold.

use crate::flags::{Editor, Framework, Language};

/// Options passed to `create-next-app`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextOptions {
    pub eslint: bool,
    pub src_dir: bool,
    pub app_router: bool,
    pub turbopack: bool,
}

impl Default for NextOptions {
    /// Answers used when prompts are skipped.
    fn default() -> Self {
        Self { eslint: true, src_dir: false, app_router: true, turbopack: true }
    }
}

/// A project with every question answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub framework: Framework,
    pub language: Language,
    pub name: String,
    /// Selected well-known package labels (see [`crate::packages`]).
    pub packages: Vec<String>,
    /// npm ids installed verbatim.
    pub extra_packages: Vec<String>,
    pub git_init: bool,
    pub install_deps: bool,
    pub editor: Editor,
    pub run_dev_server: bool,
    /// Present for Next.js projects only.
    pub next: Option<NextOptions>,
    pub dry_run: bool,
}

impl Project {
    pub fn has_package(&self, label: &str) -> bool {
        self.packages.iter().any(|selected| selected == label)
    }
}
