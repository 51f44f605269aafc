//! Named template storage.
//!
//! Every template lives in a single `templates.json` file, a JSON object
//! keyed by template name. The whole store is loaded at open and rewritten
//! atomically on every mutation; the file is small and hand-editable.

use crate::error::{ActabError, Result};
use crate::io;
use crate::record::ActuatorRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const TEMPLATES_FILE: &str = "templates.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub actuators: Vec<ActuatorRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Template {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ActabError::InvalidTemplateName);
        }
        Ok(Self {
            name,
            description: description.into(),
            actuators: Vec::new(),
            last_modified: None,
        })
    }
}

#[derive(Debug)]
pub struct TemplateStore {
    dir: PathBuf,
    templates: BTreeMap<String, Template>,
}

impl TemplateStore {
    /// Open the store rooted at `dir`, loading `templates.json` if present.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let path = dir.join(TEMPLATES_FILE);
        let templates = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { dir, templates })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(TEMPLATES_FILE)
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// All templates, sorted by name.
    pub fn list(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Insert or replace a template under its own name, stamping
    /// `last_modified`, and persist the store.
    pub fn save(&mut self, mut template: Template) -> Result<()> {
        if template.name.trim().is_empty() {
            return Err(ActabError::InvalidTemplateName);
        }
        template.last_modified = Some(Utc::now());
        tracing::debug!(name = %template.name, "saving template");
        self.templates.insert(template.name.clone(), template);
        self.persist()
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        if self.templates.remove(name).is_none() {
            return Err(ActabError::TemplateNotFound(name.to_string()));
        }
        self.persist()
    }

    /// Import templates from a JSON file: either a single template object
    /// (recognized by its `name` key) or a whole name-keyed store. Returns
    /// the imported names.
    pub fn import_file(&mut self, path: &Path) -> Result<Vec<String>> {
        let data = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&data)?;

        let is_single = value
            .as_object()
            .is_some_and(|o| o.get("name").is_some_and(serde_json::Value::is_string));

        let mut imported = Vec::new();
        if is_single {
            let template: Template = serde_json::from_value(value)?;
            if template.name.trim().is_empty() {
                return Err(ActabError::InvalidTemplateFile(path.display().to_string()));
            }
            imported.push(template.name.clone());
            self.templates.insert(template.name.clone(), template);
        } else if value.is_object() {
            let many: BTreeMap<String, Template> = serde_json::from_value(value)?;
            for (name, template) in many {
                imported.push(name.clone());
                self.templates.insert(name, template);
            }
        } else {
            return Err(ActabError::InvalidTemplateFile(path.display().to_string()));
        }
        self.persist()?;
        Ok(imported)
    }

    /// Export one template to a standalone JSON file.
    pub fn export_file(&self, name: &str, path: &Path) -> Result<()> {
        let template = self
            .get(name)
            .ok_or_else(|| ActabError::TemplateNotFound(name.to_string()))?;
        let data = serde_json::to_string_pretty(template)?;
        io::atomic_write(path, data.as_bytes())
    }

    fn persist(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.templates)?;
        io::atomic_write(&self.path(), data.as_bytes())
    }
}
