//! Entity type definitions
//!
//! - [`Project`] - a portfolio entry with display metadata, links and
//!   technical facets
//! - [`Category`] - closed set of project categories with a fallback variant

pub mod project;

pub use project::{Accent, CallToAction, Category, Project, ProjectImages, TechnicalFacet};
