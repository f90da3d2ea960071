//! Template rendering for compliance reports.
//!
//! Uses Handlebars with custom helpers:
//! - fixed: Format a number to N decimal places ("n/a" for anything else)
//! - join: Join an array of strings with a separator

use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde_json::Value;

use crate::templates::TemplatesFile;
use crate::RenderError;

// Non-finite report numbers serialize as null and render as "n/a"
handlebars_helper!(fixed: |value: Json, places: u64| match value.as_f64() {
    Some(number) => format!("{:.*}", places as usize, number),
    None => "n/a".to_string(),
});

handlebars_helper!(join: |items: array, separator: str| {
    items
        .iter()
        .map(|item| match item.as_str() {
            Some(text) => text.to_string(),
            None => item.to_string(),
        })
        .collect::<Vec<_>>()
        .join(separator)
});

/// Compiled renderer with registered helpers
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
    templates: TemplatesFile,
}

impl ReportRenderer {
    pub fn new(templates: TemplatesFile) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();

        // Output is plain text and markdown, never HTML
        handlebars.register_escape_fn(no_escape);
        handlebars.set_strict_mode(false);

        handlebars.register_helper("fixed", Box::new(fixed));
        handlebars.register_helper("join", Box::new(join));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| RenderError::Template(format!("{}: {}", name, e)))?;
        }

        Ok(Self {
            handlebars,
            templates,
        })
    }

    pub fn load(path: &str) -> Result<Self, RenderError> {
        Self::new(TemplatesFile::load(path)?)
    }

    pub fn embedded() -> Result<Self, RenderError> {
        Self::new(TemplatesFile::embedded()?)
    }

    /// Render a named template with data
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, RenderError> {
        if self.templates.get(template_name).is_none() {
            return Err(RenderError::UnknownTemplate(template_name.to_string()));
        }
        self.handlebars
            .render(template_name, data)
            .map_err(|e| RenderError::Render(e.to_string()))
    }

    /// Render a template string directly
    pub fn render_string(&self, template: &str, data: &Value) -> Result<String, RenderError> {
        self.handlebars
            .render_template(template, data)
            .map_err(|e| RenderError::Render(e.to_string()))
    }

    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.list_templates()
    }
}
