//! `list_vegetables`: every plant in the table, in table order.

use serde_json::json;
use veggietools_core::{ToolDefinition, ToolName};
use veggietools_knowledge::KnowledgeStore;

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: ToolName::ListVegetables.to_string(),
        description: "List all available vegetables and herbs in the database".into(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

/// One `- **{name}**: {harvest} harvest` line per plant, between a fixed
/// heading and a fixed footer.
pub fn render(store: &KnowledgeStore) -> String {
    let lines = store
        .plants()
        .map(|(_, record)| format!("- **{}**: {} harvest", record.name, record.days_to_harvest))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# Available Vegetables and Herbs\n\n{lines}\n\n\
         Use get_plant_info to learn more about any of these plants!"
    )
}
