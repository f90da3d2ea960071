//! Template loading for report rendering.
//!
//! Templates live in a YAML file of named handlebars templates. The
//! workspace copy in `templates/report-templates.yaml` is embedded as the
//! default set.

use serde::Deserialize;
use std::collections::HashMap;

use crate::RenderError;

pub const EMBEDDED_TEMPLATES: &str = include_str!("../../../templates/report-templates.yaml");

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
    #[serde(default)]
    pub example: Option<serde_json::Value>,
    #[serde(default)]
    pub output: Option<String>,
}

impl TemplatesFile {
    /// Load templates from a YAML file
    pub fn load(path: &str) -> Result<Self, RenderError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RenderError::Template(format!("failed to read {}: {}", path, e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        serde_yaml::from_str(yaml).map_err(|e| RenderError::Template(e.to_string()))
    }

    pub fn embedded() -> Result<Self, RenderError> {
        Self::from_yaml(EMBEDDED_TEMPLATES)
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
