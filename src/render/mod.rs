//! HTML rendering of the catalog page
//!
//! Templates live in `templates/` and are embedded into the binary. The
//! renderer turns a [`CatalogView`] into view models (cards, detail) and
//! hands them to Tera; it never reaches back into the view's state.

use miette::Diagnostic;
use rust_embed::Embed;
use serde::Serialize;
use tera::Tera;
use thiserror::Error;

use crate::core::detail::{actions_for, ProjectDetail};
use crate::core::{CatalogView, Config, EmptyState};
use crate::entities::{CallToAction, Project};

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

const PAGE_TEMPLATE: &str = "catalog.html.tera";

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("Template not found: {0}")]
    #[diagnostic(code(folio::render::missing_template))]
    NotFound(String),

    #[error("Template rendering error: {0}")]
    #[diagnostic(code(folio::render::template))]
    Template(String),
}

/// Page-level options for a render
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Render the condensed featured variant (no filter summary)
    pub featured: bool,
    /// Where contact actions point
    pub contact_url: String,
    /// Technology badges per card
    pub primary_badges: usize,
}

impl PageOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            featured: false,
            contact_url: config.contact_url().to_string(),
            primary_badges: config.primary_badges(),
        }
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
}

#[derive(Debug, Serialize)]
struct ActionModel {
    kind: &'static str,
    label: String,
    href: Option<String>,
}

#[derive(Debug, Serialize)]
struct CardModel {
    id: String,
    title: String,
    tagline: String,
    description: String,
    category: String,
    accent: &'static str,
    thumbnail: String,
    badges: Vec<String>,
    more_badges: usize,
    customizable: bool,
    actions: Vec<ActionModel>,
}

#[derive(Debug, Serialize)]
struct DetailModel {
    id: String,
    title: String,
    tagline: String,
    category: String,
    accent: &'static str,
    about: String,
    cta_description: Option<String>,
    images: Vec<String>,
    facts: Vec<(&'static str, String)>,
    highlights: Vec<String>,
    features: Vec<String>,
    technologies: Vec<String>,
    facets: Vec<(String, String)>,
    actions: Vec<ActionModel>,
    related: Vec<CardModel>,
}

#[derive(Debug, Serialize)]
struct FilterModel {
    category: String,
    search: String,
    technologies: Vec<String>,
    sort: &'static str,
}

#[derive(Debug, Serialize)]
struct EmptyModel {
    title: &'static str,
    hint: &'static str,
}

/// Catalog page renderer using Tera
pub struct SiteRenderer {
    tera: Tera,
}

impl SiteRenderer {
    /// Create a renderer with the embedded templates
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html.tera", ".html"]);
        tera.set_escape_fn(escape_html);

        let mut templates = Vec::new();
        for file in EmbeddedTemplates::iter() {
            let filename = file.as_ref();
            if let Some(content) = EmbeddedTemplates::get(filename) {
                let source = String::from_utf8_lossy(&content.data).into_owned();
                templates.push((filename.to_string(), source));
            }
        }
        // Added together so includes resolve regardless of iteration order
        tera.add_raw_templates(templates)
            .map_err(|e| RenderError::Template(e.to_string()))?;

        if !tera.get_template_names().any(|n| n == PAGE_TEMPLATE) {
            return Err(RenderError::NotFound(PAGE_TEMPLATE.to_string()));
        }

        Ok(Self { tera })
    }

    /// Render the visible list, plus the detail section when a project is
    /// selected
    pub fn render_page(&self, view: &CatalogView<'_>, options: &PageOptions) -> Result<String, RenderError> {
        let visible = view.visible();
        let cards: Vec<CardModel> = visible.iter().map(|p| card_model(p, options)).collect();
        let detail = view.detail().map(|d| detail_model(&d, options));

        let (heading, subheading) = if options.featured {
            (
                "Featured Projects",
                "Explore some of our recent work showcasing our expertise and innovation",
            )
        } else {
            (
                "Our Projects",
                "Explore our portfolio of successful projects that showcase our expertise across various industries and technologies.",
            )
        };

        let empty = view.empty_state().unwrap_or(EmptyState::NoMatches);

        let mut context = tera::Context::new();
        context.insert("heading", heading);
        context.insert("subheading", subheading);
        context.insert("show_filters", &!options.featured);
        context.insert(
            "filters",
            &FilterModel {
                category: view.category().label().to_string(),
                search: view.search_query().trim().to_string(),
                technologies: view.technologies().to_vec(),
                sort: view.sort_order().label(),
            },
        );
        context.insert("projects", &cards);
        context.insert(
            "empty",
            &EmptyModel {
                title: empty.title(),
                hint: empty.hint(),
            },
        );
        context.insert("detail", &detail);

        tracing::debug!(cards = cards.len(), detail = detail.is_some(), "rendering catalog page");

        self.tera
            .render(PAGE_TEMPLATE, &context)
            .map_err(|e| RenderError::Template(render_error_chain(&e)))
    }
}

/// HTML escaping for text and attribute values. Slashes are left alone so
/// image paths and URLs stay readable in the output.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}

fn action_models(project: &Project, actions: Vec<CallToAction>, contact_url: &str) -> Vec<ActionModel> {
    actions
        .into_iter()
        .map(|action| {
            let (kind, href) = match &action {
                CallToAction::ViewLive { url } => ("view_live", Some(url.clone())),
                CallToAction::SourceCode { url } => ("source_code", Some(url.clone())),
                CallToAction::Contact { .. } => ("contact", Some(contact_url.to_string())),
                CallToAction::ViewDetails => ("view_details", Some(format!("#detail-{}", project.id))),
            };
            ActionModel {
                kind,
                label: action.label().to_string(),
                href,
            }
        })
        .collect()
}

fn card_model(project: &Project, options: &PageOptions) -> CardModel {
    let badges = project.primary_technologies(options.primary_badges).to_vec();
    // Cards link out, but never to source code
    let actions = actions_for(project)
        .into_iter()
        .filter(|a| !matches!(a, CallToAction::SourceCode { .. }))
        .collect();

    CardModel {
        id: project.id.clone(),
        title: project.title.clone(),
        tagline: project.tagline.clone(),
        description: project.description.clone(),
        category: project.category.label().to_string(),
        accent: project.category.accent().css_class(),
        thumbnail: project.images.thumbnail.clone(),
        more_badges: project.technologies.len() - badges.len(),
        badges,
        customizable: project.is_customizable,
        actions: action_models(project, actions, &options.contact_url),
    }
}

fn detail_model(detail: &ProjectDetail<'_>, options: &PageOptions) -> DetailModel {
    let project = detail.project();

    DetailModel {
        id: project.id.clone(),
        title: project.title.clone(),
        tagline: project.tagline.clone(),
        category: project.category.label().to_string(),
        accent: project.category.accent().css_class(),
        about: project.about().to_string(),
        cta_description: project
            .contact_required
            .then(|| project.cta_description.clone())
            .flatten(),
        images: detail.images().into_iter().map(str::to_string).collect(),
        facts: detail.facts(),
        highlights: project.highlights.clone(),
        features: project.features.clone(),
        technologies: project.technologies.clone(),
        facets: project
            .technical_details
            .iter()
            .map(|f| (f.display_name(), f.detail.clone()))
            .collect(),
        actions: action_models(
            project,
            detail
                .actions()
                .into_iter()
                .filter(|a| *a != CallToAction::ViewDetails)
                .collect(),
            &options.contact_url,
        ),
        related: detail
            .related()
            .iter()
            .map(|p| card_model(p, options))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, CategoryFilter};
    use crate::entities::Category;

    fn options() -> PageOptions {
        PageOptions::from_config(&Config::default())
    }

    #[test]
    fn test_renderer_loads_templates() {
        assert!(SiteRenderer::new().is_ok());
    }

    #[test]
    fn test_render_full_catalog() {
        let renderer = SiteRenderer::new().unwrap();
        let view = CatalogView::new(Catalog::builtin());
        let html = renderer.render_page(&view, &options()).unwrap();

        for project in Catalog::builtin().projects() {
            assert!(html.contains(&format!("id=\"project-{}\"", project.id)));
        }
        assert!(html.contains("Our Projects"));
        assert!(html.contains("Showing <strong>5</strong> projects"));
        assert!(!html.contains("class=\"detail\""));
    }

    #[test]
    fn test_render_escapes_text() {
        let renderer = SiteRenderer::new().unwrap();
        let view = CatalogView::new(Catalog::builtin());
        let html = renderer.render_page(&view, &options()).unwrap();
        // "M.B.E. Society's" must not reach the page unescaped
        assert!(!html.contains("Society's College"));
    }

    #[test]
    fn test_render_contact_action_uses_contact_url() {
        let renderer = SiteRenderer::new().unwrap();
        let mut view = CatalogView::new(Catalog::builtin());
        view.set_category(CategoryFilter::Only(Category::Business));
        let html = renderer.render_page(&view, &options()).unwrap();

        assert!(html.contains("href=\"/#contact\""));
        assert!(html.contains("Customizable"));
    }

    #[test]
    fn test_render_empty_state() {
        let renderer = SiteRenderer::new().unwrap();
        let mut view = CatalogView::new(Catalog::builtin());
        view.set_search("no such project anywhere");
        let html = renderer.render_page(&view, &options()).unwrap();

        assert!(html.contains("No projects found"));
        assert!(html.contains("Try adjusting your filters or search query"));
    }

    #[test]
    fn test_render_detail_section() {
        let renderer = SiteRenderer::new().unwrap();
        let mut view = CatalogView::new(Catalog::builtin());
        view.select("mcs-chatbot");
        let html = renderer.render_page(&view, &options()).unwrap();

        assert!(html.contains("id=\"detail-mcs-chatbot\""));
        assert!(html.contains("Related Projects"));
        assert!(html.contains("/projects/mcs-chatbot/chat-interface.png"));
        assert!(html.contains("Architecture &amp; Implementation"));
    }

    #[test]
    fn test_render_featured_hides_filters() {
        let renderer = SiteRenderer::new().unwrap();
        let view = CatalogView::featured(Catalog::builtin(), 2);
        let html = renderer.render_page(&view, &options().featured(true)).unwrap();

        assert!(html.contains("Featured Projects"));
        assert!(!html.contains("class=\"filters\""));
        assert!(html.contains("id=\"project-custom-billing-software\""));
        assert!(!html.contains("id=\"project-bytefest-2k25\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape_html("Society's /path"), "Society&#39;s /path");
    }

    #[test]
    fn test_card_badges_split() {
        let project = Catalog::builtin().get("mcs-chatbot").unwrap();
        let card = card_model(project, &options());
        assert_eq!(card.badges, vec!["React", "FastAPI", "Python"]);
        assert_eq!(card.more_badges, 7);
        assert!(card.actions.iter().all(|a| a.kind != "source_code"));
    }
}
