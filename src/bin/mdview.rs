//! Command-line interface for mdview
//! This binary reads a markdown file, parses it, and prints the document
//! tree in the requested output format.
//!
//! Usage:
//!   mdview `<path>` [--format `<format>`]   - Print the document tree
//!   mdview --list-formats                   - List all available formats

use clap::{Arg, ArgAction, Command};
use mdview::markdown::formats::FormatRegistry;
use mdview::markdown::parsing::parse;

fn main() {
    let matches = Command::new("mdview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting markdown document trees")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the markdown file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: tree)")
                .default_value("tree"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let format = matches.get_one::<String>("format").unwrap();
    handle_view_command(&registry, path, format);
}

/// Handle the view command
fn handle_view_command(registry: &FormatRegistry, path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path, e);
        std::process::exit(1);
    });

    let root = parse(&source);

    let output = registry.serialize(&root, format).unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!("\nAvailable formats:");
        for name in registry.list_formats() {
            if let Some(formatter) = registry.get(&name) {
                eprintln!("  {} - {}", name, formatter.description());
            }
        }
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
