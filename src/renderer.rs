//! Rendering of the help text and of the command lines a plan runs.
use crate::error::Result;
use minijinja::{Environment, UndefinedBehavior};

/// Fills a template with values from a JSON context.
pub trait TemplateRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if the template is malformed or uses a
    ///   value the context does not provide
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja environment for command lines and the help text.
/// Values missing from the context are errors, not empty strings.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_render_joins_lists() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({"packages": ["axios", "@clerk/nextjs"]});
        let rendered = renderer.render("npm i {{ packages | join(' ') }}", &context).unwrap();
        assert_eq!(rendered, "npm i axios @clerk/nextjs");
    }

    #[test]
    fn test_render_reports_syntax_errors() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render("{{ unclosed", &serde_json::json!({}));
        assert!(matches!(result, Err(Error::MinijinjaError(_))));
    }

    #[test]
    fn test_missing_values_are_errors() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render("npm i {{ packages }}", &serde_json::json!({}));
        assert!(matches!(result, Err(Error::MinijinjaError(_))));
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        let renderer = MiniJinjaRenderer::new();
        let rendered = renderer.render("{{ program }}\n", &serde_json::json!({"program": "esyt"}));
        assert_eq!(rendered.unwrap(), "esyt\n");
    }
}
