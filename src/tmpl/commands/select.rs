//! Works out which templates to copy and where to, from the command line
//! first and from prompts for whatever it leaves out.
//!
//! - Names come from positional arguments, or a prompt when there are none.
//! - Destination comes from `--dist`, then `-d`. It is only prompted for when
//!   the names were prompted for as well; otherwise it defaults to the
//!   current directory.

use crate::catalog::Catalog;
use crate::error::{Result, TmplError};
use crate::prompt::Prompter;
use std::path::{Component, Path, PathBuf};

pub const AVAILABLE_HEADING: &str = "Available Templates:";
pub const TEMPLATES_QUESTION: &str = "Enter template(s) name(s).";
pub const DIST_QUESTION: &str = "Where to copy it (leave empty for current directory)?";

/// What the command line supplied.
#[derive(Debug, Clone, Default)]
pub struct SelectionArgs {
    pub names: Vec<String>,
    /// `--dist`
    pub dist: Option<String>,
    /// `-d`
    pub dist_short: Option<String>,
}

impl SelectionArgs {
    /// `--dist` wins over `-d`; empty values count as absent.
    pub fn entered_dist(&self) -> Option<&str> {
        self.dist
            .as_deref()
            .filter(|d| !d.is_empty())
            .or_else(|| self.dist_short.as_deref().filter(|d| !d.is_empty()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub destination: PathBuf,
    pub template_names: Vec<String>,
}

pub fn run(
    catalog: &Catalog,
    args: &SelectionArgs,
    prompter: &mut dyn Prompter,
    cwd: &Path,
) -> Result<Selection> {
    let interactive = args.names.is_empty();

    let template_names = if interactive {
        prompt_for_templates(catalog, prompter)?
    } else {
        args.names.clone()
    };
    validate(catalog, &template_names)?;

    let entered = match args.entered_dist() {
        Some(dist) => dist.to_string(),
        None if interactive => prompter.ask(DIST_QUESTION)?.trim().to_string(),
        None => String::new(),
    };
    let destination = resolve_destination(cwd, &entered);
    tracing::debug!(?template_names, destination = %destination.display(), interactive, "resolved selection");

    Ok(Selection {
        destination,
        template_names,
    })
}

/// Lists the catalog, then reads whitespace-separated names.
pub fn prompt_for_templates(catalog: &Catalog, prompter: &mut dyn Prompter) -> Result<Vec<String>> {
    let names: Vec<&str> = catalog.names().collect();
    prompter.show(AVAILABLE_HEADING, &names)?;
    let answer = prompter.ask(TEMPLATES_QUESTION)?;
    Ok(answer.split_whitespace().map(str::to_string).collect())
}

pub fn validate(catalog: &Catalog, names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(TmplError::NoTemplateNames);
    }
    if !catalog.contains_all(names) {
        return Err(TmplError::MissingTemplates);
    }
    Ok(())
}

/// Empty means the current directory; relative paths are taken from `cwd`.
///
/// `.` and `..` are folded lexically, so `ghost/../real` never touches `ghost`.
pub fn resolve_destination(cwd: &Path, entered: &str) -> PathBuf {
    if entered.is_empty() {
        normalize(cwd)
    } else {
        normalize(&cwd.join(entered))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}
