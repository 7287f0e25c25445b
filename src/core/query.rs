//! Query engine over project lists
//!
//! Every function here is pure: it takes a caller-supplied list of project
//! references and returns a new list. Inputs are never reordered in place.

use crate::core::catalog::Catalog;
use crate::entities::{Category, Project};

/// Category selection: everything, or one category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.filter_label(),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(Category::from(s)))
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Display order of the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    /// Most recently added first
    #[default]
    Newest,
    /// Collection order
    Oldest,
    /// By title, A to Z
    Alphabetical,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::Oldest => "Oldest",
            SortOrder::Alphabetical => "A-Z",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::Oldest => write!(f, "oldest"),
            SortOrder::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "alphabetical" | "a-z" => Ok(SortOrder::Alphabetical),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// Keep projects in `filter`'s category, preserving order
pub fn filter_by_category<'a>(projects: &[&'a Project], filter: &CategoryFilter) -> Vec<&'a Project> {
    match filter {
        CategoryFilter::All => projects.to_vec(),
        CategoryFilter::Only(_) => projects.iter().copied().filter(|p| filter.matches(p)).collect(),
    }
}

/// Case-insensitive substring search over title, tagline, description and
/// technologies. A blank query matches everything.
pub fn search<'a>(projects: &[&'a Project], query: &str) -> Vec<&'a Project> {
    let query = query.trim();
    if query.is_empty() {
        return projects.to_vec();
    }

    let needle = query.to_lowercase();
    projects
        .iter()
        .copied()
        .filter(|p| matches_query(p, &needle))
        .collect()
}

fn matches_query(project: &Project, needle: &str) -> bool {
    project.title.to_lowercase().contains(needle)
        || project.tagline.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
        || project
            .technologies
            .iter()
            .any(|tech| tech.to_lowercase().contains(needle))
}

/// Keep projects using at least one of `selected`. An empty selection
/// matches everything.
pub fn filter_by_technologies<'a, S: AsRef<str>>(
    projects: &[&'a Project],
    selected: &[S],
) -> Vec<&'a Project> {
    if selected.is_empty() {
        return projects.to_vec();
    }

    projects
        .iter()
        .copied()
        .filter(|p| selected.iter().any(|tech| p.uses(tech.as_ref())))
        .collect()
}

/// Reorder a list. "Newest" is positional: later entries count as newer.
pub fn sort<'a>(projects: &[&'a Project], order: SortOrder) -> Vec<&'a Project> {
    let mut sorted = projects.to_vec();
    match order {
        SortOrder::Alphabetical => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
        SortOrder::Newest => sorted.reverse(),
        SortOrder::Oldest => {}
    }
    sorted
}

/// Sort by a mode name; unknown names leave the order untouched
pub fn sort_by_name<'a>(projects: &[&'a Project], mode: &str) -> Vec<&'a Project> {
    match mode.parse::<SortOrder>() {
        Ok(order) => sort(projects, order),
        Err(_) => {
            tracing::debug!(mode, "unknown sort mode, keeping input order");
            projects.to_vec()
        }
    }
}

/// Projects sharing a category or a technology with `id`, in collection
/// order, at most `limit` of them. Unknown ids have no relations.
pub fn related<'a>(catalog: &'a Catalog, id: &str, limit: usize) -> Vec<&'a Project> {
    let Some(subject) = catalog.get(id) else {
        return Vec::new();
    };

    catalog
        .projects()
        .iter()
        .filter(|p| p.id != subject.id)
        .filter(|p| {
            p.category == subject.category
                || p.technologies.iter().any(|tech| subject.uses(tech))
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    fn project(id: &str, title: &str, category: Category, techs: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            category,
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_by_category_all_is_identity() {
        let all = Catalog::builtin().all();
        assert_eq!(filter_by_category(&all, &CategoryFilter::All), all);
    }

    #[test]
    fn test_filter_by_category_is_exact_and_complete() {
        let catalog = Catalog::builtin();
        let all = catalog.all();
        for category in catalog.categories() {
            let filtered = filter_by_category(&all, &CategoryFilter::Only(category.clone()));
            assert!(filtered.iter().all(|p| p.category == category));
            let expected: Vec<&Project> =
                all.iter().copied().filter(|p| p.category == category).collect();
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn test_filter_business_projects() {
        let all = Catalog::builtin().all();
        let filtered = filter_by_category(&all, &"business".parse().unwrap());
        assert_eq!(ids(&filtered), vec!["navakruti-visions", "custom-billing-software"]);
    }

    #[test]
    fn test_filter_unknown_category_matches_nothing() {
        let all = Catalog::builtin().all();
        let filtered = filter_by_category(&all, &"robotics".parse().unwrap());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_search_empty_is_identity() {
        let all = Catalog::builtin().all();
        assert_eq!(search(&all, ""), all);
        assert_eq!(search(&all, "   "), all);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = Catalog::builtin().all();
        let upper = search(&all, "RAG");
        assert!(!upper.is_empty());
        assert_eq!(search(&all, "rag"), upper);
        assert_eq!(search(&all, "Rag"), upper);
    }

    #[test]
    fn test_search_chatbot() {
        let all = Catalog::builtin().all();
        assert_eq!(ids(&search(&all, "chatbot")), vec!["mcs-chatbot"]);
    }

    #[test]
    fn test_search_matches_technologies_and_trims() {
        let all = Catalog::builtin().all();
        assert_eq!(ids(&search(&all, "  mongodb ")), vec!["custom-billing-software"]);
    }

    #[test]
    fn test_search_preserves_order() {
        let all = Catalog::builtin().all();
        let found = search(&all, "react");
        assert_eq!(found, all);
    }

    #[test]
    fn test_filter_by_technologies() {
        let all = Catalog::builtin().all();
        let react = filter_by_technologies(&all, &["React"]);
        let expected: Vec<&Project> = all.iter().copied().filter(|p| p.uses("React")).collect();
        assert_eq!(react, expected);

        let none: [&str; 0] = [];
        assert_eq!(filter_by_technologies(&all, &none), all);
    }

    #[test]
    fn test_filter_by_technologies_is_or() {
        let all = Catalog::builtin().all();
        let found = filter_by_technologies(&all, &["MongoDB", "FastAPI"]);
        assert_eq!(ids(&found), vec!["mcs-chatbot", "custom-billing-software"]);
    }

    #[test]
    fn test_filter_by_technologies_tolerates_empty_tech_list() {
        let bare = project("bare", "Bare", Category::WebApp, &[]);
        let list = vec![&bare];
        assert!(filter_by_technologies(&list, &["React"]).is_empty());
        assert!(search(&list, "react").is_empty());
    }

    #[test]
    fn test_sort_alphabetical_is_ordered_and_idempotent() {
        let all = Catalog::builtin().all();
        let sorted = sort(&all, SortOrder::Alphabetical);
        assert!(sorted.windows(2).all(|w| w[0].title <= w[1].title));
        assert_eq!(sort(&sorted, SortOrder::Alphabetical), sorted);
    }

    #[test]
    fn test_sort_newest_reverses_and_oldest_keeps() {
        let all = Catalog::builtin().all();
        let mut reversed = all.clone();
        reversed.reverse();
        assert_eq!(sort(&all, SortOrder::Newest), reversed);
        assert_eq!(sort(&all, SortOrder::Oldest), all);
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let all = Catalog::builtin().all();
        let before = all.clone();
        let _ = sort(&all, SortOrder::Newest);
        assert_eq!(all, before);
    }

    #[test]
    fn test_sort_by_unknown_name_is_noop() {
        let all = Catalog::builtin().all();
        assert_eq!(sort_by_name(&all, "popularity"), all);
        assert_eq!(sort_by_name(&all, "oldest"), all);
        assert_eq!(sort_by_name(&all, "A-Z"), sort(&all, SortOrder::Alphabetical));
    }

    #[test]
    fn test_related_excludes_subject_and_respects_limit() {
        let catalog = Catalog::builtin();
        for p in catalog.projects() {
            let related = related(catalog, &p.id, 3);
            assert!(related.len() <= 3);
            assert!(related.iter().all(|r| r.id != p.id));
        }
    }

    #[test]
    fn test_related_unknown_id_is_empty() {
        assert!(related(Catalog::builtin(), "nonexistent", 3).is_empty());
    }

    #[test]
    fn test_related_uses_category_or_technology() {
        let a = project("a", "A", Category::Business, &["Rust"]);
        let b = project("b", "B", Category::Business, &["Go"]);
        let c = project("c", "C", Category::AiMl, &["Python"]);
        let d = project("d", "D", Category::Educational, &["Rust", "Elm"]);
        let catalog = Catalog::new(vec![a, b, c, d]);

        assert_eq!(ids(&related(&catalog, "a", 3)), vec!["b", "d"]);
        assert_eq!(ids(&related(&catalog, "a", 1)), vec!["b"]);
        assert!(related(&catalog, "c", 3).is_empty());
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "ai-ml".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::AiMl)
        );
    }
}
