use clap::Parser;
use flatdoc::{output, pipeline};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "flatdoc")]
#[command(about = "Flatten dated Markdown categories into an ordered documentation site")]
#[command(long_about = "\
Flatten dated Markdown categories into an ordered documentation site

Every subdirectory of the input directory is a category. Every Markdown file
inside it is an article named YYYY-MM-DD-title.md. The configuration file
decides which categories are published and in what order.

Input structure:

  content/                          # inputDir
  ├── Guides/
  │   ├── 2023-01-01-Intro.md
  │   └── 2023-02-01-Setup.md
  └── FAQ/
      └── 2023-03-01-Billing.md

Output structure:

  docs/                             # outputDir
  ├── index.md                      # Outline of all categories and articles
  └── all/
      ├── 1a2b3c4d.md               # One page per article, named by title hash
      └── ...

Configuration (JSON, or TOML when the file ends in .toml):

  {
    \"title\": \"Help Center\",
    \"author\": \"Docs Team\",
    \"inputDir\": \"content\",
    \"outputDir\": \"docs\",
    \"category\": [
      { \"name\": \"Guides\", \"articleOrder\": \"asc\" },
      { \"name\": \"FAQ\", \"articleOrder\": \"desc\" }
    ]
  }")]
#[command(version)]
struct Cli {
    /// Path to the site configuration file
    config: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match pipeline::run(&cli.config, |stage| output::print_stage(&stage)) {
        Ok(summary) => {
            output::print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
