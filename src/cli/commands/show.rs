//! `folio show` command - The detail view of a single project

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::style_category;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Catalog, Config, ProjectDetail};
use crate::entities::{CallToAction, Project};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Project ID
    pub id: String,
}

/// Structured detail output (json/yaml)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailOutput<'a> {
    #[serde(flatten)]
    project: &'a Project,
    images: Vec<&'a str>,
    actions: Vec<CallToAction>,
    related: Vec<&'a str>,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = Catalog::builtin();
    let project = catalog.require(&args.id)?;
    let Some(detail) = ProjectDetail::new(catalog, &project.id) else {
        return Err(miette::miette!("Project '{}' disappeared from the catalog", project.id));
    };

    match global.resolve_format(&config, OutputFormat::Auto) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output(&detail)).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&output(&detail)).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Id => println!("{}", project.id),
        OutputFormat::Md => print!("{}", markdown(&detail, config.contact_url())),
        OutputFormat::Tsv | OutputFormat::Csv | OutputFormat::Auto => {
            print_human(&detail, config.contact_url(), config.primary_badges(), global.quiet)
        }
    }

    Ok(())
}

fn output<'a>(detail: &ProjectDetail<'a>) -> DetailOutput<'a> {
    DetailOutput {
        project: detail.project(),
        images: detail.images(),
        actions: detail.actions(),
        related: detail.related().iter().map(|p| p.id.as_str()).collect(),
    }
}

/// Where an action leads, if anywhere
fn action_target(action: &CallToAction, contact_url: &str) -> Option<String> {
    match action {
        CallToAction::ViewLive { url } | CallToAction::SourceCode { url } => Some(url.clone()),
        CallToAction::Contact { .. } => Some(contact_url.to_string()),
        CallToAction::ViewDetails => None,
    }
}

pub(crate) fn print_human(
    detail: &ProjectDetail<'_>,
    contact_url: &str,
    primary_badges: usize,
    quiet: bool,
) {
    let project = detail.project();

    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(&project.id).cyan());
    println!("{}: {}", style("Title").bold(), style(&project.title).yellow());
    let badges = detail.badges(primary_badges);
    print!("{}: {}", style("Category").bold(), style_category(&project.category));
    if badges.customizable {
        print!("  {}", style("[Customizable]").green());
    }
    println!();
    if !badges.technologies.is_empty() {
        print!("{}: {}", style("Stack").bold(), badges.technologies.join(", "));
        if badges.more > 0 {
            print!(" {}", style(format!("+{}", badges.more)).dim());
        }
        println!();
    }
    println!("{}", style(&project.tagline).italic());
    println!("{}", style("─".repeat(60)).dim());

    for action in detail.actions() {
        match action_target(&action, contact_url) {
            Some(target) => println!("  {} {} {}", style("→").cyan(), action.label(), style(target).dim()),
            None => println!("  {} {}", style("→").cyan(), action.label()),
        }
        if let CallToAction::Contact {
            description: Some(description),
            ..
        } = &action
        {
            println!("    {}", style(description).dim());
        }
    }
    println!();

    println!("{}", style("About This Project").bold());
    println!("{}", project.about());
    println!();

    let facts = detail.facts();
    if !facts.is_empty() {
        for (label, value) in &facts {
            println!("{}: {}", style(label).dim(), value);
        }
        println!();
    }

    if quiet {
        return;
    }

    print_list("Key Highlights", &project.highlights);
    print_list("Features", &project.features);

    if !project.technologies.is_empty() {
        println!("{}", style("Technologies Used").bold());
        println!("  {}", project.technologies.join(", "));
        println!();
    }

    if !project.technical_details.is_empty() {
        println!("{}", style("Architecture & Implementation").bold());
        for facet in &project.technical_details {
            println!("  {}: {}", style(facet.display_name()).cyan(), facet.detail);
        }
        println!();
    }

    let images = detail.images();
    println!("{} ({})", style("Images").bold(), images.len());
    for image in images {
        println!("  {}", style(image).dim());
    }

    if !detail.related().is_empty() {
        println!();
        println!("{}", style("Related Projects").bold());
        for related in detail.related() {
            println!(
                "  {:<26} {} {}",
                style(&related.id).cyan(),
                related.title,
                style(format!("({})", related.category.label())).dim()
            );
        }
    }
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}", style(heading).bold());
    for item in items {
        println!("  • {}", item);
    }
    println!();
}

fn markdown(detail: &ProjectDetail<'_>, contact_url: &str) -> String {
    let project = detail.project();
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", project.title));
    out.push_str(&format!("*{}* | {}\n\n", project.category.label(), project.tagline));

    for action in detail.actions() {
        match action_target(&action, contact_url) {
            Some(target) => out.push_str(&format!("- [{}]({})\n", action.label(), target)),
            None => out.push_str(&format!("- {}\n", action.label())),
        }
    }
    out.push('\n');

    out.push_str("## About This Project\n\n");
    out.push_str(project.about());
    out.push_str("\n\n");

    let facts = detail.facts();
    if !facts.is_empty() {
        out.push_str("| Fact | Value |\n|------|-------|\n");
        for (label, value) in facts {
            out.push_str(&format!("| {} | {} |\n", label, value.replace('|', "\\|")));
        }
        out.push('\n');
    }

    for (heading, items) in [("Key Highlights", &project.highlights), ("Features", &project.features)] {
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("## {}\n\n", heading));
        for item in items {
            out.push_str(&format!("- {}\n", item));
        }
        out.push('\n');
    }

    if !project.technologies.is_empty() {
        out.push_str("## Technologies Used\n\n");
        out.push_str(&project.technologies.join(", "));
        out.push_str("\n\n");
    }

    if !project.technical_details.is_empty() {
        out.push_str("## Architecture & Implementation\n\n");
        for facet in &project.technical_details {
            out.push_str(&format!("- **{}**: {}\n", facet.display_name(), facet.detail));
        }
        out.push('\n');
    }

    if !detail.related().is_empty() {
        out.push_str("## Related Projects\n\n");
        for related in detail.related() {
            out.push_str(&format!("- {} (`{}`)\n", related.title, related.id));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_action_targets_contact_url() {
        let action = CallToAction::Contact {
            text: "Get Quote".to_string(),
            description: None,
        };
        assert_eq!(action_target(&action, "/#contact").as_deref(), Some("/#contact"));
        assert_eq!(action_target(&CallToAction::ViewDetails, "/#contact"), None);
    }

    #[test]
    fn test_markdown_detail() {
        let detail = ProjectDetail::new(Catalog::builtin(), "mcs-chatbot").unwrap();
        let md = markdown(&detail, "/#contact");
        assert!(md.starts_with("# "));
        assert!(md.contains("## About This Project"));
        assert!(md.contains("## Related Projects"));
    }
}
