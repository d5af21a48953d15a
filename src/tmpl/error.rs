use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TmplError {
    #[error("Templates directory {root} is unavailable: {source}")]
    CatalogUnavailable {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Templates \"{}\" and \"{}\" both resolve to the name \"{name}\"", .first.display(), .second.display())]
    DuplicateTemplateName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("You have to enter a template name.")]
    NoTemplateNames,

    #[error("Can't find all the entered templates.")]
    MissingTemplates,

    #[error("Couldn't find \"{0}\" template.")]
    TemplateNotFound(String),

    #[error("{source}")]
    CopyFailed {
        copied: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("No input provided.")]
    NoInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl TmplError {
    /// Process exit status for this failure. Every failure is terminal and maps to `1`.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Number of templates already on disk when the failure happened.
    pub fn copied(&self) -> Option<usize> {
        match self {
            TmplError::CopyFailed { copied, .. } => Some(*copied),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TmplError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_failure_reports_underlying_message() {
        let err = TmplError::CopyFailed {
            copied: 1,
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "source vanished"),
        };
        assert_eq!(err.to_string(), "source vanished");
        assert_eq!(err.copied(), Some(1));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn not_found_names_the_template() {
        let err = TmplError::TemplateNotFound("web".into());
        assert_eq!(err.to_string(), "Couldn't find \"web\" template.");
        assert_eq!(err.copied(), None);
    }
}
