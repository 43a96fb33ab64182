//! Renders one template against one piece of model data into one file.

use log::debug;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{display_path, Error, Result};
use crate::renderer::{RenderError, TemplateRenderer};

/// Writes rendered artifacts to disk through a [`TemplateRenderer`].
pub struct ArtifactGenerator<'a> {
    engine: &'a dyn TemplateRenderer,
}

impl<'a> ArtifactGenerator<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer) -> Self {
        Self { engine }
    }

    /// Renders `template_path` against `data` into `output_path`.
    ///
    /// The output file is created (or truncated) before the template is read,
    /// so a failure past that point may leave an empty or partial file behind.
    ///
    /// # Errors
    /// * `Error::InvalidInput` if `data` serializes to `null` or the template
    ///   and output paths are the same; nothing is opened in that case
    /// * `Error::OutputCreateError` if the output file cannot be created
    /// * `Error::TemplateReadError` if the template cannot be read
    /// * `Error::TemplateParseError` / `Error::TemplateExecutionError` from the
    ///   engine
    /// * `Error::OutputWriteError` if the rendered text cannot be written out
    pub fn generate<T, P, Q>(&self, data: &T, template_path: P, output_path: Q) -> Result<()>
    where
        T: Serialize + ?Sized,
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let template_path = template_path.as_ref();
        let output_path = output_path.as_ref();

        let context = serde_json::to_value(data)
            .map_err(|e| Error::InvalidInput(format!("unserializable template data: {e}")))?;
        if context.is_null() {
            return Err(Error::InvalidInput("template data is null".to_string()));
        }

        if template_path == output_path {
            return Err(Error::InvalidInput(format!(
                "template ({}) cannot be the same file as the output",
                template_path.display()
            )));
        }

        let out_file = File::create(output_path).map_err(|source| Error::OutputCreateError {
            path: display_path(output_path),
            source,
        })?;

        let template = fs::read_to_string(template_path).map_err(|source| {
            Error::TemplateReadError { path: display_path(template_path), source }
        })?;

        // Dropping the writer on an error path still flushes what was buffered.
        let mut writer = BufWriter::new(out_file);
        self.engine.render_to(&template, &context, &mut writer).map_err(|e| match e {
            RenderError::Parse(message) => {
                Error::TemplateParseError { path: display_path(template_path), message }
            }
            RenderError::Execution(message) => {
                Error::TemplateExecutionError { path: display_path(template_path), message }
            }
            RenderError::Io(source) => {
                Error::OutputWriteError { path: display_path(output_path), source }
            }
        })?;

        writer.flush().map_err(|source| Error::OutputWriteError {
            path: display_path(output_path),
            source,
        })?;

        debug!("Rendered '{}' into '{}'", template_path.display(), output_path.display());
        Ok(())
    }
}
