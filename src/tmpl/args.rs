use clap::Parser;
use std::ffi::OsString;

const KNOWN_LONG: &[&str] = &["dist", "name", "verbose", "help", "version"];
const KNOWN_SHORT: &[char] = &['d', 'n', 'v', 'h', 'V'];

#[derive(Parser, Debug)]
#[command(name = "tmpl", version)]
#[command(about = "Copy template files into a project", long_about = None)]
pub struct Cli {
    /// Names of the templates to copy (prompts when omitted)
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// Destination directory (defaults to the current directory)
    #[arg(long = "dist", value_name = "PATH")]
    pub dist: Option<String>,

    /// Short form of --dist (--dist wins when both are given)
    #[arg(short = 'd', value_name = "PATH")]
    pub dist_short: Option<String>,

    /// Base name for the copies; each keeps its template's extension
    #[arg(short, long, value_name = "BASE")]
    pub name: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Drops flags tmpl doesn't know so they are ignored instead of rejected.
///
/// An unknown flag without an inline value takes the next token as its value
/// when that token doesn't start with `-` (`--force web` drops both), except
/// `--no-<flag>` which never takes one. The program name and everything after
/// `--` are kept as is, as are non-UTF-8 tokens.
pub fn known_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut kept = Vec::new();
    let mut positional_only = false;
    let mut drop_value = false;

    for (i, arg) in args.into_iter().map(Into::into).enumerate() {
        if i == 0 || positional_only {
            kept.push(arg);
            continue;
        }
        let Some(token) = arg.to_str() else {
            drop_value = false;
            kept.push(arg);
            continue;
        };

        if std::mem::take(&mut drop_value) && !token.starts_with('-') {
            continue;
        }

        if token == "--" {
            positional_only = true;
            kept.push(arg);
        } else if let Some(long) = token.strip_prefix("--") {
            let (flag, inline_value) = match long.split_once('=') {
                Some((flag, _)) => (flag, true),
                None => (long, false),
            };
            if KNOWN_LONG.contains(&flag) {
                kept.push(arg);
            } else {
                drop_value = !inline_value && !flag.starts_with("no-");
            }
        } else if let Some(short) = token.strip_prefix('-') {
            match short.chars().next() {
                Some(c) if !KNOWN_SHORT.contains(&c) => {
                    drop_value = short.chars().all(|c| c.is_ascii_alphabetic());
                }
                _ => kept.push(arg),
            }
        } else {
            kept.push(arg);
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["tmpl"];
        full.extend_from_slice(args);
        Cli::parse_from(known_args(full))
    }

    #[test]
    fn positional_names() {
        let cli = parse(&["web", "readme"]);
        assert_eq!(cli.names, vec!["web", "readme"]);
        assert!(cli.dist.is_none());
        assert!(cli.dist_short.is_none());
    }

    #[test]
    fn no_arguments() {
        let cli = parse(&[]);
        assert!(cli.names.is_empty());
        assert!(!cli.verbose);
    }

    #[test]
    fn long_and_short_dist_are_kept_apart() {
        let cli = parse(&["web", "--dist", "out", "-d", "other"]);
        assert_eq!(cli.dist.as_deref(), Some("out"));
        assert_eq!(cli.dist_short.as_deref(), Some("other"));
    }

    #[test]
    fn dist_with_equals() {
        let cli = parse(&["--dist=site", "web"]);
        assert_eq!(cli.dist.as_deref(), Some("site"));
        assert_eq!(cli.names, vec!["web"]);
    }

    #[test]
    fn custom_name() {
        let cli = parse(&["readme", "-n", "CHANGELOG"]);
        assert_eq!(cli.name.as_deref(), Some("CHANGELOG"));
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let cli = parse(&["web", "-x", "--color=always", "readme", "--force"]);
        assert_eq!(cli.names, vec!["web", "readme"]);
    }

    #[test]
    fn unknown_flag_takes_following_value() {
        let cli = parse(&["--force", "web", "readme"]);
        assert_eq!(cli.names, vec!["readme"]);

        let cli = parse(&["-x", "web", "readme"]);
        assert_eq!(cli.names, vec!["readme"]);
    }

    #[test]
    fn unknown_flag_does_not_take_a_flag_as_value() {
        let cli = parse(&["--force", "-d", "out", "web"]);
        assert_eq!(cli.names, vec!["web"]);
        assert_eq!(cli.dist_short.as_deref(), Some("out"));
    }

    #[test]
    fn unknown_flag_with_inline_value_takes_nothing_more() {
        let cli = parse(&["--color=always", "web", "-x5", "readme"]);
        assert_eq!(cli.names, vec!["web", "readme"]);
    }

    #[test]
    fn negated_unknown_flag_takes_no_value() {
        let cli = parse(&["--no-color", "web"]);
        assert_eq!(cli.names, vec!["web"]);
    }

    #[test]
    fn everything_after_double_dash_is_positional() {
        let kept = known_args(["tmpl", "--", "--odd"]);
        assert_eq!(kept, vec![OsString::from("tmpl"), "--".into(), "--odd".into()]);
    }

    #[test]
    fn known_flags_survive_filtering() {
        let kept = known_args(["tmpl", "-v", "--verbose", "-d", "x", "--name", "y"]);
        assert_eq!(kept.len(), 7);
    }
}
