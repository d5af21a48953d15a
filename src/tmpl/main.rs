use clap::Parser;
use colored::*;
use tmpl::api::TmplApi;
use tmpl::commands::select::SelectionArgs;
use tmpl::commands::{copied_message, CmdMessage, MessageLevel};
use tmpl::config::{config_dir, TmplConfig};
use tmpl::error::{Result, TmplError};
use tmpl::prompt::LinePrompter;
use tracing_subscriber::EnvFilter;

mod args;
use args::{known_args, Cli};

fn main() {
    let cli = Cli::parse_from(known_args(std::env::args_os()));
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        report(&e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let env = |key: &str| std::env::var(key).ok();
    let config_dir = config_dir(env)?;
    let config = TmplConfig::load(&config_dir)?.with_overrides(env);

    let api = TmplApi::new(config)?;
    tracing::debug!(
        templates = api.catalog().len(),
        root = %api.config().templates_dir.display(),
        default_filename = %api.config().default_filename,
        "loaded catalog"
    );

    let cwd = std::env::current_dir()?;
    let args = SelectionArgs {
        names: cli.names,
        dist: cli.dist,
        dist_short: cli.dist_short,
    };
    let mut prompter = LinePrompter::stdio();

    let retrieval = api.retrieve_data(&args, &mut prompter, &cwd)?;
    let result = api.copy(&retrieval, cli.name.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report(error: &TmplError) {
    if let Some(copied) = error.copied() {
        print_messages(&[CmdMessage::info(copied_message(copied))]);
    }
    print_messages(&[CmdMessage::error(error.to_string())]);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
