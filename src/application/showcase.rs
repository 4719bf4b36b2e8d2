//! Demonstration runs for each pattern, written to any output stream.

use std::io::Write;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{
    auth_factory, get_instance, AuthProvider, ConfigOption, DomainResult, Node, ServiceConfig,
    WriteOpts,
};

/// How a prototype tree is printed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TreeStyle {
    /// Indented names, one per line
    #[default]
    Plain,
    /// Box-drawing tree
    Tree,
}

/// Timestamp layout for the singleton's creation time.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Print a section banner: a rule of `=`, the tab-indented name, another rule.
pub fn write_banner<W: Write + ?Sized>(w: &mut W, name: &str, width: usize) -> ApplicationResult<()> {
    let rule = "=".repeat(width);
    writeln!(w, "{rule}\n\t {name}\n{rule}").with_context("write banner")
}

/// Access the singleton from `callers` concurrent workers and report the ids seen.
#[instrument(level = "debug", skip(w))]
pub fn run_singleton<W: Write + ?Sized>(w: &mut W, callers: usize) -> ApplicationResult<Vec<Uuid>> {
    let ids: Vec<Uuid> = (0..callers)
        .into_par_iter()
        .map(|caller| {
            let instance = get_instance();
            debug!(caller, id = %instance.id(), "singleton accessed");
            instance.id()
        })
        .collect();

    for id in &ids {
        writeln!(w, "Singleton: {id}").with_context("write singleton id")?;
    }
    let created_at = get_instance().created_at().format(CREATED_AT_FORMAT);
    writeln!(w, "Created at: {created_at}").with_context("write singleton creation time")?;
    Ok(ids)
}

/// root -> [file1, file2, subfolder -> [file3, file4]]
pub fn demo_tree() -> Node {
    Node::folder(
        "root",
        vec![
            Node::file("file1"),
            Node::file("file2"),
            Node::folder("subfolder", vec![Node::file("file3"), Node::file("file4")]),
        ],
    )
}

fn write_tree<W: Write + ?Sized>(
    w: &mut W,
    tree: &Node,
    indent: usize,
    style: TreeStyle,
) -> ApplicationResult<()> {
    match style {
        TreeStyle::Plain => tree.write_entry(w, WriteOpts::with_indent(indent))?,
        TreeStyle::Tree => write!(w, "{}", tree.to_tree_string()).with_context("write tree")?,
    }
    Ok(())
}

/// Print `tree` and a clone of it; returns the clone.
#[instrument(level = "debug", skip(w, tree))]
pub fn run_prototype<W: Write + ?Sized>(
    w: &mut W,
    tree: &Node,
    indent: usize,
    style: TreeStyle,
) -> ApplicationResult<Node> {
    writeln!(w, "Original:").with_context("write prototype header")?;
    write_tree(w, tree, indent, style)?;
    writeln!(w).with_context("write prototype separator")?;

    let clone = tree.clone();
    debug!(depth = clone.depth(), "tree cloned");

    writeln!(w, "Clone:").with_context("write prototype header")?;
    write_tree(w, &clone, indent, style)?;
    writeln!(w).with_context("write prototype separator")?;
    Ok(clone)
}

/// Build a config from `opts` and print it.
pub fn run_options<W: Write + ?Sized>(
    w: &mut W,
    opts: Vec<ConfigOption>,
) -> ApplicationResult<ServiceConfig> {
    let config = ServiceConfig::new(opts);
    writeln!(w, "{config}").with_context("write config")?;
    Ok(config)
}

/// Create a customer and a seller from every named provider.
///
/// All names are resolved before anything is printed, so an unknown provider
/// produces no partial output.
#[instrument(level = "debug", skip(w))]
pub fn run_factory<W: Write + ?Sized>(w: &mut W, providers: &[String]) -> ApplicationResult<()> {
    let factories = providers
        .iter()
        .map(|name| auth_factory(name))
        .collect::<DomainResult<Vec<Box<dyn AuthProvider>>>>()?;

    for auth in &factories {
        let customer = auth.new_customer();
        let seller = auth.new_seller();
        writeln!(w, "{}: {}", auth.kind(), customer).with_context("write customer")?;
        writeln!(w, "{}: {}", auth.kind(), seller).with_context("write seller")?;
    }
    Ok(())
}

/// Run every section with banners, as the binary does without a subcommand.
pub fn run_all<W: Write + ?Sized>(
    w: &mut W,
    settings: &Settings,
    opts: Vec<ConfigOption>,
) -> ApplicationResult<()> {
    info!("running all demonstrations");

    write_banner(w, "Singleton", settings.banner_width)?;
    run_singleton(w, settings.callers)?;

    write_banner(w, "Prototype", settings.banner_width)?;
    run_prototype(w, &demo_tree(), settings.indent_width, settings.tree_style)?;

    write_banner(w, "FuncOpts", settings.banner_width)?;
    run_options(w, opts)?;

    write_banner(w, "Abstract Factory", settings.banner_width)?;
    run_factory(w, &settings.providers)?;
    Ok(())
}
