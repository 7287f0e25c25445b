//! Folio: portfolio project catalog
//!
//! An in-memory catalog of portfolio projects with category, search and
//! technology filtering, sorting, related-project lookup and a detail
//! presentation, plus a CLI and an HTML renderer on top.

pub mod cli;
pub mod core;
pub mod entities;
pub mod render;
