//! Template rendering for rosgen.
//! Wraps the MiniJinja engine behind a small trait so generation can run
//! against any engine, including fakes in tests.
use cruet::Inflector;
use log::debug;
use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use std::io::{self, Write};
use thiserror::Error;

/// Failures reported by a template engine.
///
/// Parse and execution failures are kept apart so callers can tell a broken
/// template from data that does not fit it.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Execution(String),

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template source to render
    /// * `context` - Data placeholders resolve against
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, RenderError>;

    /// Renders a template straight into `out`.
    ///
    /// Engines that can stream should override this; the default renders to
    /// a string first.
    fn render_to(
        &self,
        template: &str,
        context: &serde_json::Value,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let rendered = self.render(template, context)?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

const TEMPLATE_NAME: &str = "template";

/// MiniJinja-based template rendering engine.
///
/// Undefined variables and attributes are errors, so a template that names
/// a field the data lacks fails instead of rendering an empty string.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with strict undefined handling and the
    /// identifier case filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("snake_case", snake_case);
        env.add_filter("pascal_case", pascal_case);
        env.add_filter("screaming_snake_case", screaming_snake_case);
        Self { env }
    }

    fn compile(&self, template: &str) -> Result<Environment<'static>, RenderError> {
        let mut env = self.env.clone();
        env.add_template_owned(TEMPLATE_NAME, template.to_owned())
            .map_err(|e| RenderError::Parse(e.to_string()))?;
        debug!("Parsed template ({} bytes)", template.len());
        Ok(env)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, RenderError> {
        let env = self.compile(template)?;
        let tmpl = env.get_template(TEMPLATE_NAME).map_err(|e| RenderError::Parse(e.to_string()))?;

        tmpl.render(context).map_err(execution_error)
    }

    fn render_to(
        &self,
        template: &str,
        context: &serde_json::Value,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let env = self.compile(template)?;
        let tmpl = env.get_template(TEMPLATE_NAME).map_err(|e| RenderError::Parse(e.to_string()))?;

        tmpl.render_captured_to(context, out).map(|_| ()).map_err(execution_error)
    }
}

fn execution_error(err: minijinja::Error) -> RenderError {
    match err.kind() {
        ErrorKind::WriteFailure => RenderError::Io(io::Error::other(err.to_string())),
        _ => RenderError::Execution(err.to_string()),
    }
}

fn snake_case(value: &str) -> String {
    value.to_snake_case()
}

fn pascal_case(value: &str) -> String {
    value.to_pascal_case()
}

fn screaming_snake_case(value: &str) -> String {
    value.to_screaming_snake_case()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_nested_fields() {
        let engine = MiniJinjaRenderer::new();
        let context = json!({
            "name": "main",
            "nodes": [
                {"name": "sensor", "methods": [{"name": "tick"}]},
                {"name": "controller", "methods": [{"name": "on_sensor"}]}
            ]
        });

        let result = engine
            .render(
                "{% for node in nodes %}{{ node.name }}:{{ node.methods[0].name }};{% endfor %}",
                &context,
            )
            .unwrap();
        assert_eq!(result, "sensor:tick;controller:on_sensor;");
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let engine = MiniJinjaRenderer::new();
        let result = engine.render("Hello {{ name ", &json!({"name": "x"}));
        assert!(matches!(result, Err(RenderError::Parse(_))));
    }

    #[test]
    fn test_missing_field_is_execution_error() {
        let engine = MiniJinjaRenderer::new();
        let result = engine.render("{{ node.missing }}", &json!({"node": {"name": "x"}}));
        assert!(matches!(result, Err(RenderError::Execution(_))));

        let result = engine.render("{{ absent }}", &json!({}));
        assert!(matches!(result, Err(RenderError::Execution(_))));
    }

    #[test]
    fn test_case_filters() {
        let engine = MiniJinjaRenderer::new();
        let context = json!({"name": "on_sensor"});

        assert_eq!(engine.render("{{ name | pascal_case }}", &context).unwrap(), "OnSensor");
        assert_eq!(
            engine.render("{{ name | screaming_snake_case }}", &context).unwrap(),
            "ON_SENSOR"
        );
        assert_eq!(
            engine.render("{{ 'OnSensor' | snake_case }}", &context).unwrap(),
            "on_sensor"
        );
    }

    #[test]
    fn test_render_to_streams_output() {
        let engine = MiniJinjaRenderer::new();
        let mut out = Vec::new();
        engine.render_to("{{ a }}-{{ b }}\n", &json!({"a": 1, "b": "two"}), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1-two\n");
    }
}
