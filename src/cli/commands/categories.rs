//! `folio categories` command - Categories present in the catalog

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{escape_csv, style_category};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Catalog, Config};
use crate::entities::Category;

#[derive(clap::Args, Debug)]
pub struct CategoriesArgs {
    /// Include the "all" pseudo-category first, as the filter bar shows it
    #[arg(long)]
    pub with_all: bool,
}

#[derive(Debug, Serialize)]
struct CategoryRow {
    slug: String,
    label: String,
    heading: String,
    count: usize,
    #[serde(skip)]
    category: Option<Category>,
}

pub fn run(args: CategoriesArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = Catalog::builtin();

    let mut rows = Vec::new();
    if args.with_all {
        rows.push(CategoryRow {
            slug: "all".to_string(),
            label: "All".to_string(),
            heading: "All Projects".to_string(),
            count: catalog.len(),
            category: None,
        });
    }
    for category in catalog.categories() {
        rows.push(CategoryRow {
            slug: category.as_str().to_string(),
            label: category.filter_label().to_string(),
            heading: category.long_label().to_string(),
            count: catalog
                .projects()
                .iter()
                .filter(|p| p.category == category)
                .count(),
            category: Some(category),
        });
    }

    match global.resolve_format(&config, OutputFormat::Tsv) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&rows).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for row in &rows {
                println!("{}", row.slug);
            }
        }
        OutputFormat::Csv => {
            println!("slug,label,heading,count");
            for row in &rows {
                println!(
                    "{},{},{},{}",
                    row.slug,
                    escape_csv(&row.label),
                    escape_csv(&row.heading),
                    row.count
                );
            }
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(["Category", "Label", "Projects"]);
            for row in &rows {
                builder.push_record([row.slug.clone(), row.heading.clone(), row.count.to_string()]);
            }
            println!("{}", builder.build().with(Style::markdown()));
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            println!(
                "{:<14} {:<26} {}",
                style("CATEGORY").bold(),
                style("LABEL").bold(),
                style("PROJECTS").bold()
            );
            println!("{}", "-".repeat(50));
            for row in &rows {
                let label = match &row.category {
                    Some(category) => style_category(category).to_string(),
                    None => style(&row.heading).bold().to_string(),
                };
                let pad = 26usize.saturating_sub(console::measure_text_width(&label));
                println!(
                    "{:<14} {}{} {}",
                    row.slug,
                    label,
                    " ".repeat(pad),
                    style(row.count).cyan()
                );
            }
        }
    }

    Ok(())
}
