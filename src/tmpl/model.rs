use crate::config::TmplConfig;
use crate::naming::template_name;
use std::path::{Path, PathBuf};

/// A file under the templates root, addressable by its derived `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub location: PathBuf,
    /// Base name as it appears on disk, extension included
    pub filename: String,
    pub name: String,
    /// Extension with its leading `.`, or empty
    pub extension: String,
}

impl Template {
    pub fn new(location: &Path, config: &TmplConfig) -> Self {
        let filename = location
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = location
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let name = template_name(
            &location.to_string_lossy(),
            &config.templates_root(),
            &config.default_filename,
        );

        Self {
            location: location.to_path_buf(),
            filename,
            name,
            extension,
        }
    }

    /// Target file name for a copy renamed to `base`, keeping this template's extension.
    pub fn renamed(&self, base: &str) -> String {
        let ext = self.extension.strip_prefix('.').unwrap_or(&self.extension);
        format!("{}.{}", base, ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TmplConfig {
        TmplConfig {
            templates_dir: PathBuf::from("templates"),
            default_filename: "index".to_string(),
        }
    }

    #[test]
    fn builds_all_attributes() {
        let t = Template::new(Path::new("templates/web/index.html"), &config());
        assert_eq!(t.location, PathBuf::from("templates/web/index.html"));
        assert_eq!(t.filename, "index.html");
        assert_eq!(t.name, "web");
        assert_eq!(t.extension, ".html");
    }

    #[test]
    fn extension_is_empty_when_missing() {
        let t = Template::new(Path::new("templates/Makefile"), &config());
        assert_eq!(t.extension, "");
        assert_eq!(t.filename, "Makefile");
    }

    #[test]
    fn dotfiles_have_no_extension() {
        let t = Template::new(Path::new("templates/git/.gitignore"), &config());
        assert_eq!(t.extension, "");
        assert_eq!(t.filename, ".gitignore");
    }

    #[test]
    fn renamed_keeps_extension() {
        let t = Template::new(Path::new("templates/notes/readme.md"), &config());
        assert_eq!(t.renamed("CHANGELOG"), "CHANGELOG.md");
    }

    #[test]
    fn renamed_keeps_literal_dot_without_extension() {
        let t = Template::new(Path::new("templates/Makefile"), &config());
        assert_eq!(t.renamed("build"), "build.");
    }
}
