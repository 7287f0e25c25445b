//! `folio export` command - Render the catalog page as HTML

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::{FilterArgs, GlobalOpts};
use crate::core::{Catalog, CatalogView, Config};
use crate::render::{PageOptions, SiteRenderer};

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Open this project's detail section in the page
    #[arg(long)]
    pub project: Option<String>,

    /// Render the featured variant (newest first, featured_limit projects)
    #[arg(long, conflicts_with_all = ["category", "search", "technologies", "sort"])]
    pub featured: bool,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = Catalog::builtin();

    let mut view = if args.featured {
        let limit = args.filters.limit.unwrap_or_else(|| config.featured_limit());
        CatalogView::featured(catalog, limit)
    } else {
        args.filters.view(catalog)
    };

    if let Some(id) = &args.project {
        let project = catalog.require(id)?;
        view.select(&project.id);
    }

    let renderer = SiteRenderer::new()?;
    let options = PageOptions::from_config(&config).featured(args.featured);
    let html = renderer.render_page(&view, &options)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).into_diagnostic()?;
            }
            fs::write(path, &html).into_diagnostic()?;
            tracing::debug!(path = %path.display(), bytes = html.len(), "wrote catalog page");
            if !global.quiet {
                eprintln!(
                    "{} Wrote {} ({} visible)",
                    style("✓").green(),
                    style(path.display()).cyan(),
                    view.visible().len()
                );
            }
        }
        None => print!("{}", html),
    }

    Ok(())
}
