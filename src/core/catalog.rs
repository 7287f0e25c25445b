//! Project data store
//!
//! The catalog is an immutable collection of [`Project`] records. The
//! builtin collection is compiled in and built once per process; nothing
//! mutates it afterwards, every query produces a new derived sequence.

use miette::Diagnostic;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

use crate::core::builtin;
use crate::entities::{Category, Project};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(builtin::projects()));

/// Read-only project collection with lookup helpers
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("No project with id '{id}'")]
    #[diagnostic(code(folio::catalog::unknown_project))]
    UnknownProject {
        id: String,
        #[help]
        suggestion: Option<String>,
    },
}

impl Catalog {
    /// The compiled-in project collection
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog from records, keeping the first record for each id
    pub fn new(records: Vec<Project>) -> Self {
        let mut seen = HashSet::new();
        let mut projects = Vec::with_capacity(records.len());

        for project in records {
            if seen.insert(project.id.clone()) {
                projects.push(project);
            } else {
                tracing::warn!(id = %project.id, "dropping duplicate project id");
            }
        }

        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// All projects as a reference list, in collection order
    pub fn all(&self) -> Vec<&Project> {
        self.projects.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Exact-match lookup by id
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Lookup that reports a miss as a diagnostic with close matches
    pub fn require(&self, id: &str) -> Result<&Project, CatalogError> {
        self.get(id).ok_or_else(|| CatalogError::UnknownProject {
            id: id.to_string(),
            suggestion: self.suggest(id),
        })
    }

    /// Distinct categories, in the order they first appear
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for project in &self.projects {
            if !categories.contains(&project.category) {
                categories.push(project.category.clone());
            }
        }
        categories
    }

    /// Every technology used by any project, deduplicated and sorted
    pub fn technologies(&self) -> Vec<&str> {
        let mut techs: Vec<&str> = self
            .projects
            .iter()
            .flat_map(|p| p.technologies.iter().map(String::as_str))
            .collect();
        techs.sort_unstable();
        techs.dedup();
        techs
    }

    /// Number of projects using `tech`
    pub fn technology_count(&self, tech: &str) -> usize {
        self.projects.iter().filter(|p| p.uses(tech)).count()
    }

    fn suggest(&self, id: &str) -> Option<String> {
        let needle = id.to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let candidates: Vec<&str> = self
            .projects
            .iter()
            .filter(|p| {
                p.id.to_lowercase().contains(&needle) || p.title.to_lowercase().contains(&needle)
            })
            .map(|p| p.id.as_str())
            .collect();

        if candidates.is_empty() {
            Some("Run `folio list --format id` to see every project id".to_string())
        } else {
            Some(format!("Did you mean: {}?", candidates.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: Category, techs: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_string(),
            category,
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_get_finds_every_project() {
        let catalog = Catalog::builtin();
        for p in catalog.projects() {
            assert_eq!(catalog.get(&p.id), Some(p));
        }
        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn test_get_is_exact_match() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("MCS-CHATBOT").is_none());
        assert!(catalog.get("mcs").is_none());
    }

    #[test]
    fn test_require_suggests_close_ids() {
        let err = Catalog::builtin().require("chatbot").unwrap_err();
        let CatalogError::UnknownProject { suggestion, .. } = err;
        assert!(suggestion.unwrap().contains("mcs-chatbot"));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let categories = Catalog::builtin().categories();
        assert_eq!(
            categories,
            vec![
                Category::WebApp,
                Category::AiMl,
                Category::Educational,
                Category::Business
            ]
        );
    }

    #[test]
    fn test_categories_only_include_present_values() {
        let catalog = Catalog::new(vec![
            project("a", Category::Business, &[]),
            project("b", Category::Business, &[]),
            project("c", Category::AiMl, &[]),
        ]);
        assert_eq!(catalog.categories(), vec![Category::Business, Category::AiMl]);
    }

    #[test]
    fn test_technologies_sorted_and_deduplicated() {
        let techs = Catalog::builtin().technologies();
        let mut sorted = techs.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(techs, sorted);
        assert!(techs.contains(&"React"));
        assert_eq!(techs.iter().filter(|t| **t == "React").count(), 1);
    }

    #[test]
    fn test_technologies_case_sensitive_order() {
        let catalog = Catalog::new(vec![
            project("a", Category::WebApp, &["vite", "React"]),
            project("b", Category::WebApp, &["Axum", "React"]),
        ]);
        // Uppercase sorts before lowercase in byte order
        assert_eq!(catalog.technologies(), vec!["Axum", "React", "vite"]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut second = project("a", Category::Business, &[]);
        second.title = "second".to_string();
        let catalog = Catalog::new(vec![project("a", Category::WebApp, &[]), second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().category, Category::WebApp);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
        assert!(catalog.technologies().is_empty());
    }

    #[test]
    fn test_technology_count() {
        assert_eq!(Catalog::builtin().technology_count("React"), 5);
        assert_eq!(Catalog::builtin().technology_count("Cobol"), 0);
    }
}
