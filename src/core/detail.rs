//! Detail presentation for a single project
//!
//! Exposes what a display surface needs for the detail view: the full record,
//! the image sequence, the calls to action and the related projects panel.

use crate::core::catalog::Catalog;
use crate::core::query;
use crate::entities::{CallToAction, Project};

/// Number of related projects shown in the detail view
pub const RELATED_LIMIT: usize = 3;

/// Label used for the contact action when a project has no override
pub const DEFAULT_CONTACT_TEXT: &str = "Contact Us";

/// Receives the side effects of activating a call to action
///
/// The core never navigates on its own. A web shell would scroll to its
/// contact anchor; the CLI prints the configured contact URL.
pub trait CtaHandler {
    /// Open an external link (live site, source repository)
    fn open_link(&mut self, url: &str);

    /// Route the visitor to the contact section for `project`
    fn request_contact(&mut self, project: &Project);
}

/// Badge row of a card or detail header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badges<'a> {
    /// Primary technologies, in display order
    pub technologies: &'a [String],
    /// Technologies left out of the row ("+N")
    pub more: usize,
    pub customizable: bool,
}

#[derive(Debug, Clone)]
pub struct ProjectDetail<'a> {
    project: &'a Project,
    related: Vec<&'a Project>,
}

impl<'a> ProjectDetail<'a> {
    /// Detail for `id`, or `None` when the catalog has no such project
    pub fn new(catalog: &'a Catalog, id: &str) -> Option<Self> {
        let project = catalog.get(id)?;
        Some(Self {
            project,
            related: query::related(catalog, id, RELATED_LIMIT),
        })
    }

    pub fn project(&self) -> &'a Project {
        self.project
    }

    /// Thumbnail first, then screenshots
    pub fn images(&self) -> Vec<&'a str> {
        std::iter::once(self.project.images.thumbnail.as_str())
            .chain(self.project.images.screenshots.iter().map(String::as_str))
            .collect()
    }

    pub fn related(&self) -> &[&'a Project] {
        &self.related
    }

    /// Calls to action offered for this project, in display order
    pub fn actions(&self) -> Vec<CallToAction> {
        actions_for(self.project)
    }

    /// Label/value pairs for the key facts panel, in display order
    pub fn facts(&self) -> Vec<(&'static str, String)> {
        let project = self.project;
        let mut facts = Vec::new();
        if let Some(client) = &project.client {
            facts.push(("Client", client.clone()));
        }
        if let Some(duration) = &project.duration {
            facts.push(("Duration", duration.clone()));
        }
        if let Some(size) = project.team_size {
            facts.push(("Team Size", format!("{} members", size)));
        }
        if let Some(year) = &project.year {
            facts.push(("Year", year.clone()));
        }
        if let Some(status) = &project.status {
            facts.push(("Status", status.clone()));
        }
        facts
    }

    /// First `primary` technologies plus the customizable flag
    pub fn badges(&self, primary: usize) -> Badges<'a> {
        let technologies = self.project.primary_technologies(primary);
        Badges {
            technologies,
            more: self.project.technologies.len() - technologies.len(),
            customizable: self.project.is_customizable,
        }
    }

    /// Whether the "Customizable" badge is shown
    pub fn show_customizable_badge(&self) -> bool {
        self.project.is_customizable
    }

    /// Dispatch an action to the handler
    pub fn activate<H: CtaHandler + ?Sized>(&self, action: &CallToAction, handler: &mut H) {
        activate(self.project, action, handler);
    }
}

/// Calls to action for a project card or detail view
///
/// A live-site action only appears when the project has a live URL, and a
/// contact action only when it requires contact. Without either, the card
/// falls back to "View Details".
pub fn actions_for(project: &Project) -> Vec<CallToAction> {
    let mut actions = Vec::new();

    if project.has_live_site() {
        actions.push(CallToAction::ViewLive {
            url: project.live_url.clone(),
        });
    }

    if project.contact_required {
        actions.push(CallToAction::Contact {
            text: project
                .cta_text
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTACT_TEXT.to_string()),
            description: project.cta_description.clone(),
        });
    }

    if project.has_source() {
        actions.push(CallToAction::SourceCode {
            url: project.github_url.clone(),
        });
    }

    if !project.has_live_site() && !project.contact_required {
        actions.push(CallToAction::ViewDetails);
    }

    actions
}

pub fn activate<H: CtaHandler + ?Sized>(project: &Project, action: &CallToAction, handler: &mut H) {
    match action {
        CallToAction::ViewLive { url } | CallToAction::SourceCode { url } => {
            tracing::debug!(id = %project.id, url = %url, "opening project link");
            handler.open_link(url);
        }
        CallToAction::Contact { .. } => {
            tracing::debug!(id = %project.id, "contact requested");
            handler.request_contact(project);
        }
        CallToAction::ViewDetails => {}
    }
}
