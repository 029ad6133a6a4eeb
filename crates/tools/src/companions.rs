//! `companion_planting`: what to plant alongside, and what to keep away.

use veggietools_core::{ToolDefinition, ToolName};
use veggietools_knowledge::PlantRecord;

use crate::bullet_list;
use crate::catalog::plant_schema;

const FOOTER: &str =
    "Companion planting helps with pest control, pollination, and maximizing space usage.";

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: ToolName::CompanionPlanting.to_string(),
        description: "Get companion planting recommendations for a specific plant".into(),
        input_schema: plant_schema("Name of the plant to find companions for"),
    }
}

pub fn render(record: &PlantRecord) -> String {
    format!(
        "# Companion Planting for {name}\n\n\
         **Good Companions:**\n{companions}\n\n\
         **Avoid Planting With:**\n{avoid}\n\n\
         {FOOTER}",
        name = record.name,
        companions = bullet_list(record.companions),
        avoid = bullet_list(record.avoid),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use veggietools_knowledge::KnowledgeStore;

    #[test]
    fn lists_are_capitalized_in_stored_order() {
        let store = KnowledgeStore::builtin();
        let text = render(store.lookup_plant("carrot").unwrap());

        assert!(text.starts_with("# Companion Planting for Carrot"));
        assert!(text.contains(
            "**Good Companions:**\n- Onions\n- Leeks\n- Rosemary\n- Sage\n\n"
        ));
        assert!(text.contains("**Avoid Planting With:**\n- Dill\n- Parsnip\n\n"));
        assert!(text.ends_with(FOOTER));
    }

    #[test]
    fn multi_word_entries_capitalize_first_word_only() {
        let store = KnowledgeStore::builtin();
        let text = render(store.lookup_plant("cucumber").unwrap());
        assert!(text.contains("- Aromatic herbs"));
    }
}
