//! `get_plant_info`: the full growing guide for one plant.

use veggietools_core::{ToolDefinition, ToolName};
use veggietools_knowledge::PlantRecord;

use crate::catalog::plant_schema;

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: ToolName::GetPlantInfo.to_string(),
        description: "Get detailed growing information for a specific vegetable or herb".into(),
        input_schema: plant_schema(
            "Name of the plant (e.g., tomato, lettuce, carrot, pepper, cucumber, basil, zucchini)",
        ),
    }
}

/// Render the growing guide. One label per line; lists are joined with ", ".
pub fn render(record: &PlantRecord) -> String {
    format!(
        "# {name} Growing Guide\n\n\
         **Planting Depth:** {depth}\n\
         **Spacing:** {spacing}\n\
         **Days to Germination:** {germination}\n\
         **Days to Harvest:** {harvest}\n\
         **Soil pH:** {ph}\n\
         **Sun Requirement:** {sun}\n\
         **Watering Needs:** {water}\n\n\
         **Companion Plants:** {companions}\n\
         **Avoid Planting With:** {avoid}\n\n\
         **Common Pests:** {pests}\n\n\
         **Tips:** {tips}",
        name = record.name,
        depth = record.planting_depth,
        spacing = record.spacing,
        germination = record.days_to_germination,
        harvest = record.days_to_harvest,
        ph = record.soil_ph,
        sun = record.sun_requirement,
        water = record.watering_needs,
        companions = record.companions.join(", "),
        avoid = record.avoid.join(", "),
        pests = record.common_pests.join(", "),
        tips = record.tips,
    )
}
