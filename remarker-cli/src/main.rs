//! Remarker CLI
//!
//! Reads the HTML 4.01 reference pages from a resource directory and prints
//! the extracted tables as JSON, or the element builder methods generated
//! from the element table.

mod stubs;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use remarker_html::{parse_document, print_tree};
use remarker_vocab::{DirectorySource, NodeSource, Tables, Vocabulary};
use serde::Serialize;

/// Remarker: HTML 4.01 vocabulary extraction
#[derive(Parser, Debug)]
#[command(name = "remarker")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Dump the element table
    remarker --resources ./w3c elements

    # Generate one builder method per element
    remarker stubs > Elements.java.part

    # Check which rows a query picks out of a page
    remarker tree attributes.html --query "//tr[td[1]/@title='Name']"
"#)]
struct Cli {
    /// Directory holding characters.html, elements.html and attributes.html
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "REMARKER_RESOURCES",
        default_value = "resources"
    )]
    resources: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the character entity table as JSON
    Characters,
    /// Print the element table as JSON
    Elements,
    /// Print the attribute table as JSON
    Attributes,
    /// Print every table as one JSON object
    All,
    /// Print one builder method per element
    Stubs,
    /// Print the parsed tree of a resource, or the nodes a query selects
    Tree {
        /// Resource file name, relative to the resource directory
        resource: String,

        /// Path query to evaluate instead of printing the whole document
        #[arg(short, long)]
        query: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Nothing is read until a table is asked for.
    let vocabulary = Vocabulary::new(DirectorySource::new(&cli.resources));

    match cli.command {
        Command::Characters => print_json(&load(&vocabulary)?.characters),
        Command::Elements => print_json(&load(&vocabulary)?.elements),
        Command::Attributes => print_json(&load(&vocabulary)?.attributes),
        Command::All => print_json(load(&vocabulary)?),
        Command::Stubs => {
            print!("{}", stubs::render(load(&vocabulary)?.elements.values()));
            Ok(())
        }
        Command::Tree {
            ref resource,
            ref query,
        } => print_resource(vocabulary.source(), resource, query.as_deref()),
    }
}

fn load(vocabulary: &Vocabulary<DirectorySource>) -> anyhow::Result<&Tables> {
    vocabulary.tables().with_context(|| {
        format!(
            "extracting tables from {}",
            vocabulary.source().root().display()
        )
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Debug view of one resource as the markup reader sees it.
fn print_resource(
    source: &DirectorySource,
    resource: &str,
    query: Option<&str>,
) -> anyhow::Result<()> {
    let Some(query) = query else {
        let tree = parse_document(&source.read(resource)?);
        print_tree(&tree, tree.root(), 0);
        return Ok(());
    };

    let selection = source.load_nodes(resource, query)?;
    println!(
        "{} {} matched {}",
        "===".bold(),
        query.cyan(),
        format!("{} node(s)", selection.len()).green()
    );
    for &node in selection.nodes() {
        print_tree(selection.tree(), node, 0);
    }
    Ok(())
}
