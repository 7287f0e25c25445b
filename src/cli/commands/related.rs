//! `folio related` command - Projects related to a project

use console::style;
use miette::Result;

use crate::cli::table::{print_projects, TableConfig};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::detail::RELATED_LIMIT;
use crate::core::{query, Catalog, Config};

#[derive(clap::Args, Debug)]
pub struct RelatedArgs {
    /// Project ID
    pub id: String,

    /// Maximum number of related projects
    #[arg(long, short = 'n', default_value_t = RELATED_LIMIT)]
    pub limit: usize,
}

pub fn run(args: RelatedArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = Catalog::builtin();
    let subject = catalog.require(&args.id)?;

    let related = query::related(catalog, &subject.id, args.limit);
    let format = global.resolve_format(&config, OutputFormat::Tsv);

    if related.is_empty() {
        match format {
            OutputFormat::Json | OutputFormat::Yaml => println!("[]"),
            OutputFormat::Id | OutputFormat::Csv => {}
            _ => println!("No projects related to {}", style(&subject.title).yellow()),
        }
        return Ok(());
    }

    let table = TableConfig {
        badges: config.primary_badges(),
        show_summary: !global.quiet,
        ..TableConfig::default()
    };
    print_projects(&related, format, &table)
}
