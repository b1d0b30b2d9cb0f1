//! Re-checks a [`Flags`] record, wherever its values came from.
//!
//! Absent fields are always acceptable: they are asked for interactively.
//! A reported field is meant to be cleared back to absent by the caller so
//! the prompt collects it again.

use crate::constants::{REASON_INVALID, REASON_UNSUPPORTED};
use crate::flags::Flags;
use indexmap::IndexMap;
use std::fmt;

/// Record fields the validator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Framework,
    Language,
    ProjectName,
    SelectedIde,
}

impl Field {
    /// Key of the field in the configuration record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Framework => "framework",
            Field::Language => "language",
            Field::ProjectName => "projectName",
            Field::SelectedIde => "selectedIDE",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project name must be non-empty and free of whitespace.
pub fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}

/// Returns the reason for every present field holding a disallowed value.
///
/// Reasons are diagnostics only (`"unsupported"` or `"invalid"`).
pub fn validate_flags(flags: &Flags) -> IndexMap<Field, &'static str> {
    let mut invalid = IndexMap::new();

    if let Some(framework) = &flags.framework {
        if !framework.is_supported() {
            invalid.insert(Field::Framework, REASON_UNSUPPORTED);
        }
    }
    if let Some(language) = &flags.language {
        if !language.is_supported() {
            invalid.insert(Field::Language, REASON_UNSUPPORTED);
        }
    }
    if let Some(name) = &flags.project_name {
        if !is_valid_project_name(name) {
            invalid.insert(Field::ProjectName, REASON_INVALID);
        }
    }
    if let Some(editor) = &flags.selected_ide {
        if !editor.is_supported() {
            invalid.insert(Field::SelectedIde, REASON_INVALID);
        }
    }

    invalid
}

impl Flags {
    /// Resets a field to absent.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Framework => self.framework = None,
            Field::Language => self.language = None,
            Field::ProjectName => self.project_name = None,
            Field::SelectedIde => self.selected_ide = None,
        }
    }
}

/// Validates `flags` and clears every reported field, returning the report.
pub fn clear_invalid(flags: &mut Flags) -> IndexMap<Field, &'static str> {
    let invalid = validate_flags(flags);
    for field in invalid.keys() {
        flags.clear(*field);
    }
    invalid
}
