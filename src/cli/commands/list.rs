//! `folio list` command - List projects with filtering

use console::style;
use miette::Result;

use crate::cli::table::{print_projects, ListColumn, TableConfig};
use crate::cli::{FilterArgs, GlobalOpts, OutputFormat};
use crate::core::{Catalog, CatalogView, Config, EmptyState};

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Columns to display (can specify multiple)
    #[arg(long, value_delimiter = ',', default_values_t = ListColumn::DEFAULT.to_vec())]
    pub columns: Vec<ListColumn>,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let view = args.filters.view(Catalog::builtin());
    let projects = view.visible();

    if args.count {
        println!("{}", projects.len());
        return Ok(());
    }

    let format = global.resolve_format(&config, OutputFormat::Tsv);

    if projects.is_empty() {
        print_empty(&view, format, global.quiet);
        return Ok(());
    }

    let table = TableConfig {
        columns: args.columns,
        badges: config.primary_badges(),
        show_summary: !global.quiet,
    };
    print_projects(&projects, format, &table)
}

/// Empty-state messaging, distinct for "filters active" and "nothing to show"
pub(crate) fn print_empty(view: &CatalogView<'_>, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json | OutputFormat::Yaml => println!("[]"),
        OutputFormat::Id | OutputFormat::Csv => {}
        _ => {
            let Some(state) = view.empty_state() else {
                return;
            };
            println!("{}", style(state.title()).bold());
            if quiet {
                return;
            }
            println!("{}", style(state.hint()).dim());
            if state == EmptyState::NoMatches {
                println!();
                println!("Clear all filters with: {}", style("folio list").yellow());
            }
        }
    }
}
