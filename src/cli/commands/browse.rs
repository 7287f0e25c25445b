//! `folio browse` command - Interactive catalog browser
//!
//! Drives a [`CatalogView`] from terminal prompts: every menu choice is one
//! state transition, and the list is re-derived from the view after each.

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{pluralize, style_category};
use crate::cli::GlobalOpts;
use crate::core::{Catalog, CatalogView, CategoryFilter, Config, CtaHandler, SortOrder};
use crate::entities::{CallToAction, Category, Project};

#[derive(clap::Args, Debug)]
pub struct BrowseArgs {
    /// Start with this project open
    #[arg(long)]
    pub open: Option<String>,
}

/// Prints where an action leads instead of navigating
struct TerminalCta<'a> {
    contact_url: &'a str,
}

impl CtaHandler for TerminalCta<'_> {
    fn open_link(&mut self, url: &str) {
        println!("{} {}", style("Open:").bold(), style(url).cyan().underlined());
    }

    fn request_contact(&mut self, project: &Project) {
        println!(
            "{} {}",
            style("Contact us:").bold(),
            style(self.contact_url).cyan().underlined()
        );
        if let Some(description) = &project.cta_description {
            println!("{}", style(description).dim());
        }
    }
}

enum MainChoice {
    Open,
    Category,
    Search,
    Technologies,
    Sort,
    Clear,
    Quit,
}

pub fn run(args: BrowseArgs, global: &GlobalOpts) -> Result<()> {
    if !Term::stdout().is_term() {
        return Err(miette::miette!(
            help = "Use `folio list` or `folio show` for non-interactive output",
            "browse needs an interactive terminal"
        ));
    }

    let config = Config::load();
    let catalog = Catalog::builtin();
    let theme = ColorfulTheme::default();
    let mut handler = TerminalCta {
        contact_url: config.contact_url(),
    };

    let mut view = CatalogView::new(catalog);
    if let Some(id) = &args.open {
        catalog.require(id)?;
        view.select(id);
    }

    loop {
        if view.is_detail_open() {
            detail_loop(
                &mut view,
                &theme,
                &mut handler,
                config.primary_badges(),
                global.quiet,
            )?;
            continue;
        }

        print_list(&view);

        let choices = main_menu(&view);
        let labels: Vec<String> = choices.iter().map(|(label, _)| label.clone()).collect();
        let Some(index) = Select::with_theme(&theme)
            .with_prompt("Browse")
            .items(&labels)
            .default(0)
            .interact_opt()
            .into_diagnostic()?
        else {
            return Ok(());
        };

        match choices[index].1 {
            MainChoice::Open => {
                let visible = view.visible();
                let titles: Vec<String> = visible.iter().map(|p| p.title.clone()).collect();
                if let Some(i) = Select::with_theme(&theme)
                    .with_prompt("Open project")
                    .items(&titles)
                    .default(0)
                    .interact_opt()
                    .into_diagnostic()?
                {
                    view.select(&visible[i].id);
                }
            }
            MainChoice::Category => {
                let filters = category_choices(catalog);
                let labels: Vec<&str> = filters.iter().map(|f| f.label()).collect();
                let current = filters.iter().position(|f| f == view.category()).unwrap_or(0);
                if let Some(i) = Select::with_theme(&theme)
                    .with_prompt("Category")
                    .items(&labels)
                    .default(current)
                    .interact_opt()
                    .into_diagnostic()?
                {
                    view.set_category(filters[i].clone());
                }
            }
            MainChoice::Search => {
                let query: String = Input::with_theme(&theme)
                    .with_prompt("Search projects")
                    .with_initial_text(view.search_query())
                    .allow_empty(true)
                    .interact_text()
                    .into_diagnostic()?;
                view.set_search(query);
            }
            MainChoice::Technologies => {
                let techs = catalog.technologies();
                let selected: Vec<bool> = techs
                    .iter()
                    .map(|t| view.technologies().iter().any(|s| s == t))
                    .collect();
                let picked = MultiSelect::with_theme(&theme)
                    .with_prompt("Technologies (space to toggle)")
                    .items(&techs)
                    .defaults(&selected)
                    .interact()
                    .into_diagnostic()?;
                view.set_technologies(picked.into_iter().map(|i| techs[i]));
            }
            MainChoice::Sort => {
                let orders = [SortOrder::Newest, SortOrder::Oldest, SortOrder::Alphabetical];
                let labels: Vec<&str> = orders.iter().map(|o| o.label()).collect();
                let current = orders.iter().position(|o| *o == view.sort_order()).unwrap_or(0);
                if let Some(i) = Select::with_theme(&theme)
                    .with_prompt("Sort by")
                    .items(&labels)
                    .default(current)
                    .interact_opt()
                    .into_diagnostic()?
                {
                    view.set_sort(orders[i]);
                }
            }
            MainChoice::Clear => view.clear_filters(),
            MainChoice::Quit => return Ok(()),
        }
    }
}

/// Filter-bar order: "All", the known categories, then any other category
/// present in the catalog
fn category_choices(catalog: &Catalog) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];
    filters.extend(Category::KNOWN.into_iter().map(CategoryFilter::Only));
    filters.extend(
        catalog
            .categories()
            .into_iter()
            .filter(|c| !c.is_known())
            .map(CategoryFilter::Only),
    );
    filters
}

fn main_menu(view: &CatalogView<'_>) -> Vec<(String, MainChoice)> {
    let mut choices = Vec::new();
    if !view.visible().is_empty() {
        choices.push(("Open a project".to_string(), MainChoice::Open));
    }
    choices.push((format!("Category: {}", view.category().label()), MainChoice::Category));

    let search = view.search_query().trim();
    let search_label = if search.is_empty() {
        "Search".to_string()
    } else {
        format!("Search: \"{}\"", search)
    };
    choices.push((search_label, MainChoice::Search));

    choices.push((
        format!("Technologies ({} selected)", view.technologies().len()),
        MainChoice::Technologies,
    ));
    choices.push((format!("Sort: {}", view.sort_order().label()), MainChoice::Sort));
    if view.has_active_filters() {
        choices.push(("Clear all filters".to_string(), MainChoice::Clear));
    }
    choices.push(("Quit".to_string(), MainChoice::Quit));
    choices
}

fn print_list(view: &CatalogView<'_>) {
    let visible = view.visible();
    println!();
    println!("{}", summary_line(view, visible.len()));
    println!("{}", style("─".repeat(60)).dim());

    match view.empty_state() {
        Some(state) => {
            println!("{}", style(state.title()).bold());
            println!("{}", style(state.hint()).dim());
        }
        None => {
            for project in &visible {
                println!(
                    "  {:<28} {}  {}",
                    style(&project.title).yellow(),
                    style_category(&project.category),
                    style(&project.tagline).dim()
                );
            }
        }
    }
    println!();
}

/// "Showing 2 projects in Business matching "shop""
fn summary_line(view: &CatalogView<'_>, count: usize) -> String {
    let mut line = format!("Showing {}", pluralize(count, "project", "projects"));
    if let CategoryFilter::Only(category) = view.category() {
        line.push_str(&format!(" in {}", category.filter_label()));
    }
    let search = view.search_query().trim();
    if !search.is_empty() {
        line.push_str(&format!(" matching \"{}\"", search));
    }
    if !view.technologies().is_empty() {
        line.push_str(&format!(" using {}", view.technologies().join(" or ")));
    }
    line
}

fn detail_loop(
    view: &mut CatalogView<'_>,
    theme: &ColorfulTheme,
    handler: &mut TerminalCta<'_>,
    primary_badges: usize,
    quiet: bool,
) -> Result<()> {
    let Some(detail) = view.detail() else {
        view.close_detail();
        return Ok(());
    };

    println!();
    super::show::print_human(&detail, handler.contact_url, primary_badges, quiet);
    println!();

    let actions: Vec<CallToAction> = detail
        .actions()
        .into_iter()
        .filter(|a| *a != CallToAction::ViewDetails)
        .collect();
    let related: Vec<&Project> = detail.related().to_vec();

    let mut labels: Vec<String> = actions.iter().map(|a| a.label().to_string()).collect();
    labels.extend(related.iter().map(|p| format!("Related: {}", p.title)));
    labels.push("Back to projects".to_string());

    let choice = Select::with_theme(theme)
        .with_prompt(detail.project().title.as_str())
        .items(&labels)
        .default(0)
        .interact_opt()
        .into_diagnostic()?;

    match choice {
        Some(i) if i < actions.len() => detail.activate(&actions[i], handler),
        Some(i) if i < actions.len() + related.len() => {
            let id = related[i - actions.len()].id.clone();
            view.select_related(&id);
        }
        _ => view.close_detail(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let mut view = CatalogView::new(Catalog::builtin());
        assert_eq!(summary_line(&view, 5), "Showing 5 projects");

        view.set_category(CategoryFilter::Only(Category::Business));
        view.set_search("  billing ");
        assert_eq!(
            summary_line(&view, 1),
            "Showing 1 project in Business matching \"billing\""
        );
    }

    #[test]
    fn test_main_menu_offers_clear_only_with_filters() {
        let mut view = CatalogView::new(Catalog::builtin());
        let labels: Vec<String> = main_menu(&view).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels.first().map(String::as_str), Some("Open a project"));
        assert!(!labels.iter().any(|l| l == "Clear all filters"));

        view.set_search("zzz-no-match");
        let labels: Vec<String> = main_menu(&view).into_iter().map(|(l, _)| l).collect();
        assert!(!labels.iter().any(|l| l == "Open a project"));
        assert!(labels.iter().any(|l| l == "Clear all filters"));
    }

    #[test]
    fn test_category_choices_follow_filter_bar() {
        let choices = category_choices(Catalog::builtin());
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[0], CategoryFilter::All);
        assert_eq!(choices[1], CategoryFilter::Only(Category::WebApp));
        assert_eq!(choices[4], CategoryFilter::Only(Category::Business));

        let catalog = Catalog::new(vec![Project {
            id: "bot".to_string(),
            category: Category::from("robotics"),
            ..Default::default()
        }]);
        let choices = category_choices(&catalog);
        assert_eq!(
            choices.last(),
            Some(&CategoryFilter::Only(Category::Other("robotics".to_string())))
        );
    }
}
