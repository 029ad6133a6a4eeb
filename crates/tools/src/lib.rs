//! Gardening tools for VeggieTools.
//!
//! Each tool lives in its own module with its catalog entry and its text
//! renderer. The [`Dispatcher`] owns a shared [`KnowledgeStore`] and routes a
//! validated request to the right renderer.
//!
//! Output is markdown-flavored plain text. Label lines such as
//! `**Soil pH:** 6.0-6.8` are read back line by line by the landing page, so
//! their wording and one-field-per-line layout must not drift.

pub mod calendar;
pub mod catalog;
pub mod companions;
pub mod dispatcher;
pub mod listing;
pub mod pests;
pub mod plant_info;
pub mod soil;
pub mod watering;

pub use catalog::catalog;
pub use dispatcher::Dispatcher;

pub use veggietools_knowledge::KnowledgeStore;

/// Uppercase the first character, leave the rest alone ("carrot rust fly"
/// becomes "Carrot rust fly").
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render `items` as a markdown bullet list, one capitalized entry per line.
pub(crate) fn bullet_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", capitalize(item)))
        .collect::<Vec<_>>()
        .join("\n")
}
