//! # Template Catalog
//!
//! The catalog is the flat list of every file found under the templates root,
//! in traversal order (sorted by file name within each directory). It is built
//! once per invocation and only read afterwards.
//!
//! Two files may derive the same name, e.g. `web.html` and `web/index.html`
//! with the default filename `index`. The catalog refuses to build in that case
//! instead of silently picking one of them.

use crate::config::TmplConfig;
use crate::error::{Result, TmplError};
use crate::model::Template;
use std::collections::HashMap;
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    /// Walks `config.templates_dir` and collects every non-directory entry.
    pub fn build(config: &TmplConfig) -> Result<Self> {
        let root = &config.templates_dir;
        let mut templates = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| TmplError::CatalogUnavailable {
                root: root.clone(),
                source,
            })?;
            if entry.file_type().is_dir() {
                continue;
            }

            let template = Template::new(entry.path(), config);
            tracing::trace!(name = %template.name, path = %entry.path().display(), "found template");
            templates.push(template);
        }

        tracing::debug!(count = templates.len(), root = %root.display(), "built template catalog");
        Self::from_templates(templates)
    }

    /// Wraps already-built templates, rejecting duplicate names.
    ///
    /// Empty names (top-level dotfiles) can never be selected and are not checked.
    pub fn from_templates(templates: Vec<Template>) -> Result<Self> {
        {
            let mut seen: HashMap<&str, &Template> = HashMap::with_capacity(templates.len());
            for template in templates.iter().filter(|t| !t.name.is_empty()) {
                if let Some(first) = seen.insert(template.name.as_str(), template) {
                    return Err(TmplError::DuplicateTemplateName {
                        name: template.name.clone(),
                        first: first.location.clone(),
                        second: template.location.clone(),
                    });
                }
            }
        }
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// First template whose name matches exactly (case-sensitive).
    pub fn find(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// True iff every requested name is in the catalog. Vacuously true for no names.
    pub fn contains_all<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().all(|n| self.find(n.as_ref()).is_some())
    }

    /// Looks up each name in order, failing on the first one that is missing.
    pub fn get_templates<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Template>> {
        names
            .iter()
            .map(|n| {
                self.find(n.as_ref())
                    .cloned()
                    .ok_or_else(|| TmplError::TemplateNotFound(n.as_ref().to_string()))
            })
            .collect()
    }
}
