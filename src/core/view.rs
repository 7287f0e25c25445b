//! Catalog view controller
//!
//! [`CatalogView`] owns the interactive state of the projects page (category,
//! search text, selected technologies, sort order, selected project) and
//! derives the visible list from it on demand.
//!
//! # Pipeline
//!
//! The visible list is always derived in this order:
//!
//! 1. the full catalog
//! 2. category filter
//! 3. when the search text is not blank, the search runs against the *full*
//!    catalog and the category filter is applied again to its result,
//!    replacing step 2's output
//! 4. technology filter (OR)
//! 5. sort
//! 6. truncation to the display limit, if any
//!
//! Step 3 searches the whole catalog rather than the category-filtered list.
//! Reordering these steps changes which projects survive the truncation.

use crate::core::catalog::Catalog;
use crate::core::detail::ProjectDetail;
use crate::core::query::{self, CategoryFilter, SortOrder};
use crate::entities::Project;

/// Why the visible list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Filters are active and nothing matched
    NoMatches,
    /// No filters are active and the catalog has nothing to show
    EmptyCatalog,
}

impl EmptyState {
    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoMatches => "No projects found",
            EmptyState::EmptyCatalog => "No projects yet",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoMatches => "Try adjusting your filters or search query",
            EmptyState::EmptyCatalog => "Projects will appear here once they are added",
        }
    }
}

/// Interactive catalog state plus the derived visible list
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    catalog: &'a Catalog,
    category: CategoryFilter,
    search: String,
    technologies: Vec<String>,
    sort: SortOrder,
    selected: Option<String>,
    limit: Option<usize>,
}

impl<'a> CatalogView<'a> {
    /// A view over `catalog` with every slot at its default
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            category: CategoryFilter::All,
            search: String::new(),
            technologies: Vec::new(),
            sort: SortOrder::default(),
            selected: None,
            limit: None,
        }
    }

    /// Condensed view: no filters, newest first, at most `limit` entries
    pub fn featured(catalog: &'a Catalog, limit: usize) -> Self {
        Self::new(catalog).with_limit(Some(limit))
    }

    /// Cap the visible list. `Some(0)` shows everything, like `None`.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    /// Selected technologies, in the order they were selected
    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        tracing::debug!(%category, "category changed");
        self.category = category;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        tracing::debug!(query = %self.search, "search changed");
    }

    /// Add `tech` to the selection, or remove it if already selected
    pub fn toggle_technology(&mut self, tech: &str) {
        if let Some(pos) = self.technologies.iter().position(|t| t == tech) {
            self.technologies.remove(pos);
        } else {
            self.technologies.push(tech.to_string());
        }
        tracing::debug!(technologies = ?self.technologies, "technology selection changed");
    }

    /// Replace the selection; repeated names are kept once
    pub fn set_technologies<I, S>(&mut self, techs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies.clear();
        for tech in techs {
            let tech = tech.into();
            if !self.technologies.contains(&tech) {
                self.technologies.push(tech);
            }
        }
        tracing::debug!(technologies = ?self.technologies, "technology selection replaced");
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        tracing::debug!(%sort, "sort order changed");
        self.sort = sort;
    }

    /// Reset category, search, technologies and sort. The selected project
    /// stays selected.
    pub fn clear_filters(&mut self) {
        self.category = CategoryFilter::All;
        self.search.clear();
        self.technologies.clear();
        self.sort = SortOrder::default();
        tracing::debug!("filters cleared");
    }

    /// Open the detail view for `id`. Returns false (and changes nothing)
    /// when the id is not in the catalog.
    pub fn select(&mut self, id: &str) -> bool {
        if self.catalog.get(id).is_none() {
            tracing::warn!(id, "ignoring selection of unknown project");
            return false;
        }
        tracing::debug!(id, "project selected");
        self.selected = Some(id.to_string());
        true
    }

    /// Switch the open detail view to a related project
    pub fn select_related(&mut self, id: &str) -> bool {
        self.select(id)
    }

    pub fn close_detail(&mut self) {
        if let Some(id) = self.selected.take() {
            tracing::debug!(id = %id, "detail closed");
        }
    }

    pub fn is_detail_open(&self) -> bool {
        self.selected_project().is_some()
    }

    pub fn selected_project(&self) -> Option<&'a Project> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }

    /// Detail presentation for the current selection
    pub fn detail(&self) -> Option<ProjectDetail<'a>> {
        self.selected
            .as_deref()
            .and_then(|id| ProjectDetail::new(self.catalog, id))
    }

    /// Category, search text or technology selection differ from defaults
    pub fn has_active_filters(&self) -> bool {
        !self.category.is_all() || !self.search.trim().is_empty() || !self.technologies.is_empty()
    }

    /// Derive the visible list from the current state
    pub fn visible(&self) -> Vec<&'a Project> {
        let all = self.catalog.all();

        let mut result = query::filter_by_category(&all, &self.category);

        if !self.search.trim().is_empty() {
            let found = query::search(&all, &self.search);
            result = query::filter_by_category(&found, &self.category);
        }

        result = query::filter_by_technologies(&result, &self.technologies);
        result = query::sort(&result, self.sort);

        // A zero limit means "no limit"
        if let Some(limit) = self.limit.filter(|&n| n > 0) {
            result.truncate(limit);
        }

        tracing::debug!(
            category = %self.category,
            search = %self.search,
            technologies = ?self.technologies,
            sort = %self.sort,
            visible = result.len(),
            "visible list recomputed"
        );

        result
    }

    /// Empty-state kind for the current visible list, if it is empty
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible().is_empty() {
            None
        } else if self.has_active_filters() {
            Some(EmptyState::NoMatches)
        } else {
            Some(EmptyState::EmptyCatalog)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Category;

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_defaults_show_newest_first() {
        let view = CatalogView::new(Catalog::builtin());
        assert_eq!(
            ids(&view.visible()),
            vec![
                "custom-billing-software",
                "navakruti-visions",
                "global-science-academy",
                "mcs-chatbot",
                "bytefest-2k25"
            ]
        );
        assert!(!view.has_active_filters());
        assert_eq!(view.empty_state(), None);
    }

    #[test]
    fn test_ai_ml_category_pipeline() {
        let mut view = CatalogView::new(Catalog::builtin());
        view.set_category(CategoryFilter::Only(Category::AiMl));
        assert_eq!(ids(&view.visible()), vec!["mcs-chatbot"]);
    }

    #[test]
    fn test_search_is_intersected_with_category() {
        let mut view = CatalogView::new(Catalog::builtin());
        view.set_category(CategoryFilter::Only(Category::Business));
        view.set_search("react");
        assert_eq!(
            ids(&view.visible()),
            vec!["custom-billing-software", "navakruti-visions"]
        );

        view.set_search("chatbot");
        assert!(view.visible().is_empty());
        assert_eq!(view.empty_state(), Some(EmptyState::NoMatches));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let mut view = CatalogView::new(Catalog::builtin());
        view.set_search("   ");
        assert_eq!(view.visible().len(), 5);
        assert!(!view.has_active_filters());
    }

    #[test]
    fn test_technology_filter_then_sort_then_limit() {
        let mut view = CatalogView::new(Catalog::builtin()).with_limit(Some(2));
        view.toggle_technology("TypeScript");
        view.set_sort(SortOrder::Alphabetical);
        assert_eq!(
            ids(&view.visible()),
            vec!["custom-billing-software", "global-science-academy"]
        );
    }

    #[test]
    fn test_toggle_technology_keeps_insertion_order() {
        let mut view = CatalogView::new(Catalog::builtin());
        view.toggle_technology("Vite");
        view.toggle_technology("MongoDB");
        view.toggle_technology("FastAPI");
        view.toggle_technology("MongoDB");
        assert_eq!(view.technologies(), &["Vite".to_string(), "FastAPI".to_string()]);
    }

    #[test]
    fn test_set_technologies_dedups() {
        let mut view = CatalogView::new(Catalog::builtin());
        view.set_technologies(["React", "Vite", "React"]);
        assert_eq!(view.technologies(), &["React".to_string(), "Vite".to_string()]);
    }

    #[test]
    fn test_clear_filters_keeps_selection() {
        let mut view = CatalogView::new(Catalog::builtin());
        assert!(view.select("mcs-chatbot"));
        view.set_category(CategoryFilter::Only(Category::Business));
        view.set_search("billing");
        view.set_sort(SortOrder::Alphabetical);
        assert_eq!(ids(&view.visible()), vec!["custom-billing-software"]);

        view.clear_filters();

        let expected: Vec<&Project> = {
            let mut all = Catalog::builtin().all();
            all.reverse();
            all
        };
        assert_eq!(view.visible(), expected);
        assert_eq!(view.sort_order(), SortOrder::Newest);
        assert_eq!(view.selected_id(), Some("mcs-chatbot"));
        assert!(view.is_detail_open());
    }

    #[test]
    fn test_select_unknown_is_ignored() {
        let mut view = CatalogView::new(Catalog::builtin());
        assert!(!view.select("nonexistent"));
        assert!(view.selected_id().is_none());
        assert!(view.detail().is_none());
    }

    #[test]
    fn test_select_related_replaces_subject() {
        let mut view = CatalogView::new(Catalog::builtin());
        view.select("mcs-chatbot");
        let related = view.detail().unwrap().related().to_vec();
        let next = related.first().unwrap();

        assert!(view.select_related(&next.id));
        assert_eq!(view.selected_id(), Some(next.id.as_str()));
        assert_eq!(view.detail().unwrap().project().id, next.id);

        view.close_detail();
        assert!(!view.is_detail_open());
    }

    #[test]
    fn test_selection_does_not_affect_visible_list() {
        let mut view = CatalogView::new(Catalog::builtin());
        let before = view.visible();
        view.select("bytefest-2k25");
        assert_eq!(view.visible(), before);
    }

    #[test]
    fn test_empty_catalog_state() {
        let catalog = Catalog::default();
        let view = CatalogView::new(&catalog);
        assert!(view.visible().is_empty());
        assert_eq!(view.empty_state(), Some(EmptyState::EmptyCatalog));
    }

    #[test]
    fn test_featured_is_newest_truncated() {
        let view = CatalogView::featured(Catalog::builtin(), 2);
        assert_eq!(
            ids(&view.visible()),
            vec!["custom-billing-software", "navakruti-visions"]
        );
    }

    #[test]
    fn test_zero_limit_shows_everything() {
        let view = CatalogView::new(Catalog::builtin()).with_limit(Some(0));
        assert_eq!(view.visible().len(), 5);
        assert_eq!(view.empty_state(), None);

        let featured = CatalogView::featured(Catalog::builtin(), 0);
        assert_eq!(featured.visible().len(), 5);
        assert_eq!(
            featured.visible().first().map(|p| p.id.as_str()),
            Some("custom-billing-software")
        );
    }

    #[test]
    fn test_limit_larger_than_list() {
        let view = CatalogView::new(Catalog::builtin()).with_limit(Some(50));
        assert_eq!(view.visible().len(), 5);
    }
}
