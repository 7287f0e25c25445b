//! Command implementations

pub mod browse;
pub mod categories;
pub mod completions;
pub mod config;
pub mod export;
pub mod featured;
pub mod list;
pub mod related;
pub mod show;
pub mod techs;
