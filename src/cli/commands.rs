use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{
    demo_tree, run_all, run_factory, run_options, run_prototype, run_singleton, IoResultExt,
    TreeStyle,
};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{Settings, MAX_INDENT};
use crate::domain::{set_addr, set_db_uri, set_log_file, set_timeout, ConfigOption};

/// Load settings and run the selected command against stdout.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &settings, &mut out)
}

/// Run the selected command, writing all demonstration output to `out`.
pub fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Singleton { callers }) => _singleton(out, settings, *callers),
        Some(Commands::Prototype { indent, style }) => _prototype(out, settings, *indent, *style),
        Some(Commands::Options {
            addr,
            db_uri,
            timeout,
            log_file,
        }) => _options(out, addr, db_uri, *timeout, log_file.as_deref()),
        Some(Commands::Factory { providers }) => _factory(out, settings, providers),
        Some(Commands::Config) => _config(out, settings),
        Some(Commands::Completion { shell }) => _completion(out, *shell),
        Some(Commands::All) | None => _all(out, settings),
    }
}

#[instrument(skip(out, settings))]
fn _singleton<W: Write>(out: &mut W, settings: &Settings, callers: Option<usize>) -> CliResult<()> {
    let callers = callers.unwrap_or(settings.callers);
    if callers == 0 {
        return Err(CliError::InvalidArgs("--callers must be at least 1".into()));
    }
    let ids = run_singleton(out, callers)?;
    let same_instance = ids.windows(2).all(|pair| pair[0] == pair[1]);
    debug!(callers, same_instance, "singleton run");
    Ok(())
}

#[instrument(skip(out, settings))]
fn _prototype<W: Write>(
    out: &mut W,
    settings: &Settings,
    indent: Option<usize>,
    style: Option<TreeStyle>,
) -> CliResult<()> {
    let indent = indent.unwrap_or(settings.indent_width);
    if indent > MAX_INDENT {
        return Err(CliError::InvalidArgs(format!(
            "--indent {} exceeds maximum {}",
            indent, MAX_INDENT
        )));
    }
    let style = style.unwrap_or(settings.tree_style);
    run_prototype(out, &demo_tree(), indent, style)?;
    Ok(())
}

#[instrument(skip(out))]
fn _options<W: Write>(
    out: &mut W,
    addr: &str,
    db_uri: &str,
    timeout: Option<i64>,
    log_file: Option<&str>,
) -> CliResult<()> {
    let mut opts: Vec<ConfigOption> = vec![set_addr(addr), set_db_uri(db_uri)];
    if let Some(timeout) = timeout {
        opts.push(set_timeout(timeout));
    }
    if let Some(log_file) = log_file {
        opts.push(set_log_file(log_file));
    }
    run_options(out, opts)?;
    Ok(())
}

#[instrument(skip(out, settings))]
fn _factory<W: Write>(out: &mut W, settings: &Settings, providers: &[String]) -> CliResult<()> {
    let providers = if providers.is_empty() {
        settings.providers.as_slice()
    } else {
        providers
    };
    run_factory(out, providers)?;
    Ok(())
}

#[instrument(skip(out, settings))]
fn _config<W: Write>(out: &mut W, settings: &Settings) -> CliResult<()> {
    let rendered = settings.to_toml()?;
    write!(out, "{}", rendered).with_context("write settings")?;
    Ok(())
}

#[instrument(skip(out))]
fn _completion<W: Write>(out: &mut W, shell: Shell) -> CliResult<()> {
    output::note(&format!("Generating completion file for {shell:?}..."));
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    Ok(())
}

#[instrument(skip(out, settings))]
fn _all<W: Write>(out: &mut W, settings: &Settings) -> CliResult<()> {
    let opts = vec![set_addr("Some addr"), set_db_uri("db uri")];
    run_all(out, settings, opts)?;
    Ok(())
}
