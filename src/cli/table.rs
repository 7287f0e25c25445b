//! Table formatting for project list commands
//!
//! `list`, `featured` and `related` all print a list of projects; this module
//! gives them one output path for every [`OutputFormat`].

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{escape_csv, escape_md, pluralize, style_category, truncate_str};
use crate::cli::OutputFormat;
use crate::entities::{Category, Project};

/// Columns to display in list output
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ListColumn {
    Id,
    Title,
    Category,
    Tagline,
    Techs,
    Year,
    Live,
}

impl ListColumn {
    pub const DEFAULT: [ListColumn; 4] = [
        ListColumn::Id,
        ListColumn::Title,
        ListColumn::Category,
        ListColumn::Techs,
    ];

    fn header(&self) -> &'static str {
        match self {
            ListColumn::Id => "ID",
            ListColumn::Title => "TITLE",
            ListColumn::Category => "CATEGORY",
            ListColumn::Tagline => "TAGLINE",
            ListColumn::Techs => "TECHNOLOGIES",
            ListColumn::Year => "YEAR",
            ListColumn::Live => "LIVE",
        }
    }

    /// Maximum TSV width before truncation
    fn max_width(&self) -> usize {
        match self {
            ListColumn::Id => 26,
            ListColumn::Title => 32,
            ListColumn::Category => 13,
            ListColumn::Tagline => 34,
            ListColumn::Techs => 40,
            ListColumn::Year => 10,
            ListColumn::Live => 8,
        }
    }
}

impl std::fmt::Display for ListColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListColumn::Id => write!(f, "id"),
            ListColumn::Title => write!(f, "title"),
            ListColumn::Category => write!(f, "category"),
            ListColumn::Tagline => write!(f, "tagline"),
            ListColumn::Techs => write!(f, "techs"),
            ListColumn::Year => write!(f, "year"),
            ListColumn::Live => write!(f, "live"),
        }
    }
}

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone)]
pub enum CellValue {
    /// Project id (cyan)
    Id(String),
    /// Plain text, truncated in TSV
    Text(String),
    /// Category with its accent colour
    Category(Category),
    /// Technology names, comma-separated
    Tags(Vec<String>),
    /// How the project can be reached: "live", "contact" or "-"
    Reach(&'static str),
    Empty,
}

impl CellValue {
    fn for_column(project: &Project, column: ListColumn, badges: usize) -> Self {
        match column {
            ListColumn::Id => CellValue::Id(project.id.clone()),
            ListColumn::Title => CellValue::Text(project.title.clone()),
            ListColumn::Category => CellValue::Category(project.category.clone()),
            ListColumn::Tagline => CellValue::Text(project.tagline.clone()),
            ListColumn::Techs => {
                let mut techs = project.primary_technologies(badges).to_vec();
                let extra = project.technologies.len() - techs.len();
                if extra > 0 {
                    techs.push(format!("+{}", extra));
                }
                CellValue::Tags(techs)
            }
            ListColumn::Year => match &project.year {
                Some(year) => CellValue::Text(year.clone()),
                None => CellValue::Empty,
            },
            ListColumn::Live => {
                if project.has_live_site() {
                    CellValue::Reach("live")
                } else if project.contact_required {
                    CellValue::Reach("contact")
                } else {
                    CellValue::Reach("-")
                }
            }
        }
    }

    /// Get raw string value (no formatting)
    pub fn raw(&self) -> String {
        match self {
            CellValue::Id(s) | CellValue::Text(s) => s.clone(),
            CellValue::Category(c) => c.label().to_string(),
            CellValue::Tags(tags) => tags.join(", "),
            CellValue::Reach(s) => s.to_string(),
            CellValue::Empty => "-".to_string(),
        }
    }

    /// Format for TSV output (with colors if terminal)
    pub fn format_tsv(&self, width: usize) -> String {
        let text = truncate_str(&self.raw(), width.saturating_sub(1));
        let styled = match self {
            CellValue::Id(_) => style(text).cyan().to_string(),
            CellValue::Category(c) => {
                let mut styled = style_category(c);
                if text != c.label() {
                    styled = style(text).dim();
                }
                styled.to_string()
            }
            CellValue::Reach("live") => style(text).green().to_string(),
            CellValue::Reach("contact") => style(text).yellow().to_string(),
            CellValue::Reach(_) | CellValue::Empty => style(text).dim().to_string(),
            CellValue::Text(_) | CellValue::Tags(_) => text,
        };
        pad(&styled, width)
    }

    /// Format for CSV output (RFC 4180, no colors)
    pub fn format_csv(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Category(c) => c.as_str().to_string(),
            other => escape_csv(&other.raw()),
        }
    }
}

/// Left-align `s` in `width` columns, ignoring ANSI escapes
fn pad(s: &str, width: usize) -> String {
    let visible = console::measure_text_width(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Output options for a project list
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub columns: Vec<ListColumn>,
    /// Technology badges before "+N"
    pub badges: usize,
    /// Show the "N project(s)" summary line after a TSV table
    pub show_summary: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: ListColumn::DEFAULT.to_vec(),
            badges: crate::core::config::DEFAULT_PRIMARY_BADGES,
            show_summary: true,
        }
    }
}

/// Print `projects` in `format`
pub fn print_projects(projects: &[&Project], format: OutputFormat, config: &TableConfig) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(projects).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&projects).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Id => {
            for project in projects {
                println!("{}", project.id);
            }
        }
        OutputFormat::Csv => {
            let header: Vec<String> = config.columns.iter().map(|c| c.to_string()).collect();
            println!("{}", header.join(","));
            for project in projects {
                let row: Vec<String> = config
                    .columns
                    .iter()
                    .map(|c| CellValue::for_column(project, *c, usize::MAX).format_csv())
                    .collect();
                println!("{}", row.join(","));
            }
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(config.columns.iter().map(|c| c.header().to_string()));
            for project in projects {
                builder.push_record(
                    config
                        .columns
                        .iter()
                        .map(|c| escape_md(&CellValue::for_column(project, *c, config.badges).raw())),
                );
            }
            println!("{}", builder.build().with(Style::markdown()));
        }
        OutputFormat::Tsv | OutputFormat::Auto => print_tsv(projects, config),
    }

    Ok(())
}

fn print_tsv(projects: &[&Project], config: &TableConfig) {
    let rows: Vec<Vec<CellValue>> = projects
        .iter()
        .map(|p| {
            config
                .columns
                .iter()
                .map(|c| CellValue::for_column(p, *c, config.badges))
                .collect()
        })
        .collect();

    // Size each column to its content, capped at the column's max width
    let widths: Vec<usize> = config
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let content = rows
                .iter()
                .map(|r| r[i].raw().chars().count())
                .max()
                .unwrap_or(0);
            col.header().len().max(content + 1).min(col.max_width())
        })
        .collect();

    let header: Vec<String> = config
        .columns
        .iter()
        .zip(&widths)
        .map(|(col, w)| pad(&style(col.header()).bold().to_string(), *w))
        .collect();
    println!("{}", header.join(" ").trim_end());

    let total_width: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    println!("{}", "-".repeat(total_width));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| cell.format_tsv(*w))
            .collect();
        println!("{}", cells.join(" ").trim_end());
    }

    if config.show_summary {
        println!();
        println!(
            "{} found",
            style(pluralize(projects.len(), "project", "projects")).cyan()
        );
    }
}
