//! # Template Names
//!
//! Users never type template paths. Every file under the templates root is
//! addressed by a short name derived from its location:
//!
//! ```text
//! templates/readme.md              ->  readme
//! templates/react/component.tsx    ->  react-component
//! templates/web/index.html         ->  web            (default filename elided)
//! ```
//!
//! The derivation is a fixed pipeline and its step order is part of the
//! user-facing contract: changing it renames templates.
//!
//! 1. Remove the templates root (first occurrence).
//! 2. Remove the extension: the last `.` and the non-dot run after it.
//!    That run may cross a separator, so `v1.2/readme` becomes `v1`.
//! 3. Replace each separator (`/`, `\` or `\\`) with `-`.
//! 4. Remove one leading `-`.
//! 5. Remove a trailing `-<default filename>`.

use once_cell::sync::Lazy;
use regex::Regex;

static EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[^.]+$").expect("extension pattern is valid"));

static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\(\\)?|/").expect("separator pattern is valid"));

/// Derives the user-facing name of the template at `location`.
pub fn template_name(location: &str, templates_root: &str, default_filename: &str) -> String {
    let relative = if templates_root.is_empty() {
        location.to_string()
    } else {
        location.replacen(templates_root, "", 1)
    };
    let stem = EXTENSION.replace(&relative, "");
    let dashed = SEPARATOR.replace_all(&stem, "-");
    let name = dashed.strip_prefix('-').unwrap_or(&dashed);

    if default_filename.is_empty() {
        return name.to_string();
    }
    let default_suffix = format!("-{}", default_filename);
    name.strip_suffix(default_suffix.as_str())
        .unwrap_or(name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_root_extension_and_default_filename() {
        assert_eq!(
            template_name("templates/web/index.html", "templates/", "index"),
            "web"
        );
    }

    #[test]
    fn leading_separator_left_by_root_is_dropped() {
        assert_eq!(
            template_name("templates/web/index.html", "templates", "index"),
            "web"
        );
        assert_eq!(
            template_name("templates/readme.md", "templates", "index"),
            "readme"
        );
    }

    #[test]
    fn nested_paths_are_joined_with_hyphens() {
        assert_eq!(
            template_name("templates/react/hooks/use-fetch.ts", "templates", "index"),
            "react-hooks-use-fetch"
        );
    }

    #[test]
    fn backslash_separators_are_normalized() {
        assert_eq!(
            template_name(r"C:\tpl\react\component.tsx", r"C:\tpl", "index"),
            "react-component"
        );
        assert_eq!(
            template_name(r"tpl\\react\\component.tsx", "tpl", "index"),
            "react-component"
        );
    }

    #[test]
    fn top_level_default_file_keeps_its_name() {
        assert_eq!(
            template_name("templates/index.html", "templates", "index"),
            "index"
        );
    }

    #[test]
    fn default_filename_is_only_elided_at_the_end() {
        assert_eq!(
            template_name("templates/index-page/main.css", "templates", "index"),
            "index-page-main"
        );
        assert_eq!(
            template_name("templates/web/index/base.html", "templates", "index"),
            "web-index-base"
        );
    }

    #[test]
    fn files_without_extension_keep_full_name() {
        assert_eq!(
            template_name("templates/docker/Makefile", "templates", "index"),
            "docker-Makefile"
        );
    }

    #[test]
    fn only_the_last_extension_is_removed() {
        assert_eq!(
            template_name("templates/backup.tar.gz", "templates", "index"),
            "backup.tar"
        );
    }

    #[test]
    fn extension_match_can_span_a_dotted_directory() {
        assert_eq!(
            template_name("templates/v1.2/readme", "templates", "index"),
            "v1"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let path = "templates/rust/lib/index.rs";
        let first = template_name(path, "templates", "index");
        let second = template_name(path, "templates", "index");
        assert_eq!(first, second);
        assert_eq!(first, "rust-lib");
    }

    #[test]
    fn empty_default_filename_elides_nothing() {
        assert_eq!(
            template_name("templates/web/index.html", "templates", ""),
            "web-index"
        );
    }
}
