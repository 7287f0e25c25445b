//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    browse::BrowseArgs, categories::CategoriesArgs, completions::CompletionsArgs,
    config::ConfigCommands, export::ExportArgs, featured::FeaturedArgs, list::ListArgs,
    related::RelatedArgs, show::ShowArgs, techs::TechsArgs,
};
use crate::core::{CatalogView, CategoryFilter, Config, SortOrder};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio project catalog")]
#[command(long_about = "Browse, search and render the project catalog of a consultancy portfolio site.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// Resolve `auto` against the configured default, then against the
    /// command's own default
    pub fn resolve_format(&self, config: &Config, fallback: OutputFormat) -> OutputFormat {
        if self.format != OutputFormat::Auto {
            return self.format;
        }

        config
            .default_format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f, true).ok())
            .filter(|f| *f != OutputFormat::Auto)
            .unwrap_or(fallback)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects with filtering, search and sorting
    List(ListArgs),

    /// Show the featured projects (newest first, limited)
    Featured(FeaturedArgs),

    /// Show a project's details, actions and related projects
    Show(ShowArgs),

    /// List projects related to a project
    Related(RelatedArgs),

    /// List the categories present in the catalog
    Categories(CategoriesArgs),

    /// List every technology used across the catalog
    Techs(TechsArgs),

    /// Browse the catalog interactively
    Browse(BrowseArgs),

    /// Render the catalog page as HTML
    Export(ExportArgs),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Catalog filters shared by `list` and `export`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter by category (all, web-app, ai-ml, educational, business)
    #[arg(long, short = 'c', default_value = "all")]
    pub category: CategoryFilter,

    /// Search title, tagline, description and technologies (case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Keep projects using any of these technologies (comma-separated)
    #[arg(long = "tech", short = 't', value_delimiter = ',')]
    pub technologies: Vec<String>,

    /// Sort order
    #[arg(long, default_value = "newest")]
    pub sort: SortOrder,

    /// Limit output to N projects
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl FilterArgs {
    /// Apply the filters to a view's state slots
    pub fn apply(&self, view: &mut CatalogView<'_>) {
        view.set_category(self.category.clone());
        if let Some(search) = &self.search {
            view.set_search(search.as_str());
        }
        view.set_technologies(self.technologies.iter().map(|t| t.trim().to_string()));
        view.set_sort(self.sort);
    }

    /// Build a view over `catalog` with these filters applied
    pub fn view<'a>(&self, catalog: &'a crate::core::Catalog) -> CatalogView<'a> {
        let mut view = CatalogView::new(catalog).with_limit(self.limit);
        self.apply(&mut view);
        view
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (text for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_format() {
        let global = GlobalOpts {
            format: OutputFormat::Auto,
            quiet: false,
            verbose: false,
        };
        let mut config = Config::default();
        assert_eq!(global.resolve_format(&config, OutputFormat::Tsv), OutputFormat::Tsv);

        config.default_format = Some("json".to_string());
        assert_eq!(global.resolve_format(&config, OutputFormat::Tsv), OutputFormat::Json);

        config.default_format = Some("bogus".to_string());
        assert_eq!(global.resolve_format(&config, OutputFormat::Tsv), OutputFormat::Tsv);

        let explicit = GlobalOpts {
            format: OutputFormat::Md,
            ..global
        };
        assert_eq!(explicit.resolve_format(&config, OutputFormat::Tsv), OutputFormat::Md);
    }

    #[test]
    fn test_filter_args_parse() {
        let cli = Cli::try_parse_from([
            "folio", "list", "--category", "ai-ml", "--tech", "React,Vite", "--sort", "alphabetical",
            "-n", "2",
        ])
        .unwrap();

        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.filters.technologies, vec!["React", "Vite"]);
        assert_eq!(args.filters.sort, SortOrder::Alphabetical);
        assert_eq!(args.filters.limit, Some(2));

        let view = args.filters.view(Catalog::builtin());
        let ids: Vec<&str> = view.visible().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["mcs-chatbot"]);
    }
}
