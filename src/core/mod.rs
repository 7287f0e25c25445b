//! Core module - catalog data, queries and view state

mod builtin;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod query;
pub mod view;

pub use catalog::{Catalog, CatalogError};
pub use config::{Config, ConfigError};
pub use detail::{Badges, CtaHandler, ProjectDetail};
pub use query::{CategoryFilter, SortOrder};
pub use view::{CatalogView, EmptyState};
