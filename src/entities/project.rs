//! Project entity type

use serde::{Deserialize, Serialize};

/// Project category
///
/// The four known categories are matched exhaustively everywhere a label or
/// colour is needed. Anything else lands in [`Category::Other`], which keeps
/// the raw value and borrows the web-app accent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    WebApp,
    AiMl,
    Educational,
    Business,
    /// Unrecognized category value, kept verbatim
    Other(String),
}

/// Colour family a category is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Orange,
}

impl Accent {
    /// CSS class suffix used by the HTML renderer
    pub fn css_class(&self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Purple => "accent-purple",
            Accent::Green => "accent-green",
            Accent::Orange => "accent-orange",
        }
    }
}

impl Category {
    /// All known categories, in filter-bar order
    pub const KNOWN: [Category; 4] = [
        Category::WebApp,
        Category::AiMl,
        Category::Educational,
        Category::Business,
    ];

    /// Slug used in data and on the command line
    pub fn as_str(&self) -> &str {
        match self {
            Category::WebApp => "web-app",
            Category::AiMl => "ai-ml",
            Category::Educational => "educational",
            Category::Business => "business",
            Category::Other(raw) => raw,
        }
    }

    /// Badge label shown on cards and in the detail header
    pub fn label(&self) -> &str {
        match self {
            Category::WebApp => "Web App",
            Category::AiMl => "AI/ML",
            Category::Educational => "Educational",
            Category::Business => "Business",
            Category::Other(raw) => raw,
        }
    }

    /// Label used by the category selector
    pub fn filter_label(&self) -> &str {
        match self {
            Category::WebApp => "Web Apps",
            Category::AiMl => "AI/ML",
            Category::Educational => "Educational",
            Category::Business => "Business",
            Category::Other(raw) => raw,
        }
    }

    /// Section heading label
    pub fn long_label(&self) -> &str {
        match self {
            Category::WebApp => "Web Applications",
            Category::AiMl => "AI & Machine Learning",
            Category::Educational => "Educational",
            Category::Business => "Business Solutions",
            Category::Other(raw) => raw,
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            Category::WebApp => Accent::Blue,
            Category::AiMl => Accent::Purple,
            Category::Educational => Accent::Green,
            Category::Business => Accent::Orange,
            // Unknown categories share the web-app colour
            Category::Other(_) => Accent::Blue,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "web-app" => Category::WebApp,
            "ai-ml" => Category::AiMl,
            "educational" => Category::Educational,
            "business" => Category::Business,
            _ => Category::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from(s.as_str())
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Image references for a project
///
/// References are passed to the display surface untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImages {
    pub thumbnail: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<String>,
}

/// A named technical facet ("database", "llm", ...) with its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalFacet {
    pub name: String,
    pub detail: String,
}

impl TechnicalFacet {
    pub fn new(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
        }
    }

    /// Human-readable facet name ("pdfGeneration" -> "Pdf Generation")
    pub fn display_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 4);
        for (i, ch) in self.name.chars().enumerate() {
            if i == 0 {
                out.extend(ch.to_uppercase());
            } else if ch.is_uppercase() {
                out.push(' ');
                out.push(ch);
            } else if ch == '_' || ch == '-' {
                out.push(' ');
            } else {
                out.push(ch);
            }
        }
        out
    }
}

/// A portfolio project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable unique identifier
    pub id: String,

    pub title: String,

    pub tagline: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    pub category: Category,

    /// Technology names, in display priority order
    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    /// Live deployment URL (empty when there is none)
    #[serde(default)]
    pub live_url: String,

    /// Source repository URL (empty when private)
    #[serde(default)]
    pub github_url: String,

    pub images: ProjectImages,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technical_details: Vec<TechnicalFacet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    #[serde(default)]
    pub is_customizable: bool,

    #[serde(default)]
    pub contact_required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_description: Option<String>,
}

impl Project {
    /// Whether a "view live" action may be offered
    pub fn has_live_site(&self) -> bool {
        !self.live_url.trim().is_empty()
    }

    pub fn has_source(&self) -> bool {
        !self.github_url.trim().is_empty()
    }

    /// Long description if present, the short one otherwise
    pub fn about(&self) -> &str {
        self.long_description
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.description)
    }

    /// First `n` technologies (primary badges)
    pub fn primary_technologies(&self, n: usize) -> &[String] {
        &self.technologies[..self.technologies.len().min(n)]
    }

    pub fn uses(&self, tech: &str) -> bool {
        self.technologies.iter().any(|t| t == tech)
    }
}

/// An action a display surface can offer for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallToAction {
    /// Open the live deployment
    ViewLive { url: String },
    /// Route the visitor to the contact section
    Contact {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// Open the source repository
    SourceCode { url: String },
    /// Nothing external to open; the detail view is the destination
    ViewDetails,
}

impl CallToAction {
    pub fn label(&self) -> &str {
        match self {
            CallToAction::ViewLive { .. } => "View Live",
            CallToAction::Contact { text, .. } => text,
            CallToAction::SourceCode { .. } => "View Source Code",
            CallToAction::ViewDetails => "View Details",
        }
    }
}
