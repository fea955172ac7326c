//! unword CLI - DOCX plain-text extraction tool
//!
//! A command-line tool for extracting flattened text from Word documents.

use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// DOCX plain-text extraction with a raw-XML fallback
#[derive(Parser)]
#[command(
    name = "unword",
    author = "iyulab",
    version,
    about = "Extract text from Word documents",
    long_about = "unword - DOCX plain-text extraction tool.\n\n\
                  Flattens a Word document (paragraphs and table contents) to plain text,\n\
                  falling back to a raw XML walk when the structured parser fails."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a document to plain text
    #[command(visible_alias = "txt")]
    Text {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show file metadata and a content preview
    Info {
        /// Input file path
        input: PathBuf,

        /// Print metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Text { input, output } => {
            let (content, meta) = unword::process_document(&input);

            write_output(output.as_ref(), &content)?;

            if let Some(out) = output {
                let marker = if meta.success {
                    "✓".green().bold()
                } else {
                    "!".yellow().bold()
                };
                println!(
                    "{} Extracted {} characters to {}",
                    marker,
                    meta.content_length,
                    out.display()
                );
            }
        }

        Commands::Info { input, json } => {
            let (content, meta) = unword::process_document(&input);

            if json {
                println!("{}", serde_json::to_string_pretty(&meta)?);
                return Ok(());
            }

            println!("{}", "File Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}: {}", "File".bold(), meta.name);
            println!("{}: {}", "Path".bold(), meta.path);
            println!("{}: {} bytes", "Size".bold(), meta.size);
            println!("{}: {}", "Content length".bold(), meta.content_length);
            println!("{}: {}", "Success".bold(), meta.success);
            if let Some(ref err) = meta.error {
                println!("{}: {}", "Error".bold(), err);
            }

            if !content.is_empty() {
                let preview: String = content.chars().take(500).collect();
                println!("\n{}", "Content Preview".cyan().bold());
                println!("{}", "─".repeat(40));
                println!("{}", preview);
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "unword".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX plain-text extraction with a raw-XML fallback");
    println!();
    println!("Supported formats: DOCX (.doc is recognized but unsupported)");
    println!("Repository: https://github.com/iyulab/unword");
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
