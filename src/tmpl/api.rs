//! # API Facade
//!
//! `TmplApi` is the single entry point the binary talks to. It owns the
//! resolved configuration and the catalog built from it, and dispatches to the
//! command modules:
//!
//! - [`TmplApi::retrieve_data`]: resolve which templates go where
//!   (`commands::select`), then look the templates up in the catalog.
//! - [`TmplApi::copy`]: copy a retrieval to its destination (`commands::copy`).
//!
//! Like the commands underneath, the facade never prints and never exits.
//! Prompts go through the `Prompter` handed in by the caller.

use crate::catalog::Catalog;
use crate::commands::{self, select::SelectionArgs, CmdResult};
use crate::config::TmplConfig;
use crate::error::Result;
use crate::model::Template;
use crate::prompt::Prompter;
use std::path::{Path, PathBuf};

/// Everything needed to perform a copy: where, which names, and the matching templates.
#[derive(Debug, Clone)]
pub struct Retrieval {
    pub destination: PathBuf,
    pub template_names: Vec<String>,
    pub templates: Vec<Template>,
}

pub struct TmplApi {
    config: TmplConfig,
    catalog: Catalog,
}

impl TmplApi {
    /// Builds the catalog from `config.templates_dir`.
    pub fn new(config: TmplConfig) -> Result<Self> {
        let catalog = Catalog::build(&config)?;
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &TmplConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn retrieve_data(
        &self,
        args: &SelectionArgs,
        prompter: &mut dyn Prompter,
        cwd: &Path,
    ) -> Result<Retrieval> {
        let selection = commands::select::run(&self.catalog, args, prompter, cwd)?;
        let templates = self.catalog.get_templates(&selection.template_names)?;

        Ok(Retrieval {
            destination: selection.destination,
            template_names: selection.template_names,
            templates,
        })
    }

    pub fn copy(&self, retrieval: &Retrieval, custom_name: Option<&str>) -> Result<CmdResult> {
        commands::copy::run(&retrieval.templates, &retrieval.destination, custom_name)
    }
}
