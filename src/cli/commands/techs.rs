//! `folio techs` command - Technologies used across the catalog

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::escape_csv;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Catalog, Config};

#[derive(clap::Args, Debug)]
pub struct TechsArgs {
    /// Show how many projects use each technology
    #[arg(long)]
    pub counts: bool,
}

#[derive(Debug, Serialize)]
struct TechRow<'a> {
    name: &'a str,
    projects: usize,
}

pub fn run(args: TechsArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = Catalog::builtin();
    let rows: Vec<TechRow> = catalog
        .technologies()
        .into_iter()
        .map(|name| TechRow {
            name,
            projects: catalog.technology_count(name),
        })
        .collect();

    match global.resolve_format(&config, OutputFormat::Tsv) {
        OutputFormat::Json => {
            let json = if args.counts {
                serde_json::to_string_pretty(&rows)
            } else {
                serde_json::to_string_pretty(&rows.iter().map(|r| r.name).collect::<Vec<_>>())
            };
            println!("{}", json.into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            let yaml = if args.counts {
                serde_yml::to_string(&rows)
            } else {
                serde_yml::to_string(&rows.iter().map(|r| r.name).collect::<Vec<_>>())
            };
            print!("{}", yaml.into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("name,projects");
            for row in &rows {
                println!("{},{}", escape_csv(row.name), row.projects);
            }
        }
        OutputFormat::Md => {
            for row in &rows {
                if args.counts {
                    println!("- {} ({})", row.name, row.projects);
                } else {
                    println!("- {}", row.name);
                }
            }
        }
        OutputFormat::Id | OutputFormat::Tsv | OutputFormat::Auto => {
            let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0) + 2;
            for row in &rows {
                if args.counts {
                    println!("{:<width$}{}", row.name, style(row.projects).cyan(), width = width);
                } else {
                    println!("{}", row.name);
                }
            }
        }
    }

    Ok(())
}
