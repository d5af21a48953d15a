use crate::commands::{copied_message, CmdMessage, CmdResult};
use crate::error::{Result, TmplError};
use crate::model::Template;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies `templates` into `destination`, in order, stopping at the first failure.
///
/// The destination directory is created if needed. Existing files are overwritten.
/// With `custom_name`, each target is `<custom_name>.<ext>` instead of the
/// template's own filename. Files copied before a failure stay on disk; the
/// error carries how many there were.
pub fn run(
    templates: &[Template],
    destination: &Path,
    custom_name: Option<&str>,
) -> Result<CmdResult> {
    let dist_dir = absolute(destination)?;
    ensure_dir(&dist_dir)?;

    let custom_name = custom_name.filter(|n| !n.is_empty());
    let mut copied = Vec::with_capacity(templates.len());

    for template in templates {
        let target = dist_dir.join(target_filename(template, custom_name));
        fs::copy(&template.location, &target).map_err(|source| TmplError::CopyFailed {
            copied: copied.len(),
            source,
        })?;
        tracing::debug!(from = %template.location.display(), to = %target.display(), "copied template");
        copied.push(target);
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(copied_message(copied.len())));
    Ok(result.with_copied_paths(copied))
}

pub fn target_filename(template: &Template, custom_name: Option<&str>) -> String {
    match custom_name {
        Some(base) => template.renamed(base),
        None => template.filename.clone(),
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir().map_err(TmplError::Io)?.join(path))
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(TmplError::Io)
}
