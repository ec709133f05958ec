//! recipress CLI - recipe card PDF export tool

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use serde::Deserialize;

use recipress::{export_recipe, Recipe};

#[derive(Parser)]
#[command(name = "recipress")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Export a recipe card to a paginated PDF", long_about = None)]
struct Cli {
    /// Input recipe JSON file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output PDF file (defaults to the input name with a .pdf extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Additional related recipe names, appended to those in the file
    #[arg(long, value_name = "NAME")]
    related: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// On-disk recipe document: the record plus resolved related names.
#[derive(Debug, Deserialize)]
struct RecipeFile {
    #[serde(flatten)]
    recipe: Recipe,

    #[serde(default)]
    related: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    match run(&cli) {
        Ok(output) => {
            println!(
                "{} {}",
                "Exported".green().bold(),
                output.display().to_string().cyan()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data = fs::read_to_string(&cli.input)?;
    let file: RecipeFile = serde_json::from_str(&data)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("pdf"));

    let mut related = file.related;
    related.extend(cli.related.iter().cloned());

    log::debug!(
        "exporting \"{}\" with {} related recipes to {}",
        file.recipe.name,
        related.len(),
        output.display()
    );

    export_recipe(&output, &file.recipe, &related)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_file_parses_flattened_record() {
        let json = r#"{
            "name": "Pancakes",
            "ingredients": ["flour", "milk"],
            "tags": ["breakfast"],
            "instructions": "Mix.\n\nCook.",
            "related": ["Waffles"]
        }"#;
        let file: RecipeFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.recipe.name, "Pancakes");
        assert_eq!(file.related, vec!["Waffles"]);
    }

    #[test]
    fn test_export_roundtrip_to_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("toast.json");
        fs::write(&input, r#"{"name":"Toast"}"#).unwrap();

        let cli = Cli {
            input,
            output: None,
            related: vec![],
            verbose: false,
        };
        let output = run(&cli).unwrap();
        assert!(output.ends_with("toast.pdf"));
        let bytes = fs::read(output).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
