//! `folio featured` command - The condensed featured view

use miette::Result;

use crate::cli::table::{print_projects, TableConfig};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Catalog, CatalogView, Config};

#[derive(clap::Args, Debug)]
pub struct FeaturedArgs {
    /// Number of projects to show (default: featured_limit from config)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(args: FeaturedArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let limit = args.limit.unwrap_or_else(|| config.featured_limit());
    let view = CatalogView::featured(Catalog::builtin(), limit);
    let projects = view.visible();

    let format = global.resolve_format(&config, OutputFormat::Tsv);
    if projects.is_empty() {
        super::list::print_empty(&view, format, global.quiet);
        return Ok(());
    }

    let table = TableConfig {
        badges: config.primary_badges(),
        show_summary: !global.quiet,
        ..TableConfig::default()
    };
    print_projects(&projects, format, &table)
}
