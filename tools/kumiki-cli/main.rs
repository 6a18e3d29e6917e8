use clap::Parser;
use kumiki::prelude::*;
use std::fs;
use std::process;

/// A code generation CLI for node-based AI SDK route builders
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the editor document JSON file
    document_path: String,

    /// Write the generated route source to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Prefix each emitted line with its line number, like the editor preview
    #[arg(short = 'n', long)]
    line_numbers: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let document = UiDocument::from_file(&cli.document_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load document: {}", e)));

    let graph = document
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert document: {}", e)));

    println!(
        "Loaded {} nodes and {} edges from '{}'",
        graph.nodes.len(),
        graph.edges.len(),
        cli.document_path
    );

    let mut source = generate_route(&graph);
    if cli.line_numbers {
        source = kumiki::codegen::with_line_numbers(&source);
    }

    match cli.output {
        Some(path) => {
            fs::write(&path, &source).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write output file '{}': {}", path, e))
            });
            println!("Route source written to '{}'", path);
        }
        None => {
            println!("\n{}", source);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
