//! Tool discovery: the definitions returned by `tools/list`.

use serde_json::json;
use veggietools_core::{ToolDefinition, ToolName};

use crate::{calendar, companions, listing, pests, plant_info, soil, watering};

/// Every tool definition, in [`ToolName::ALL`] order.
pub fn catalog() -> Vec<ToolDefinition> {
    ToolName::ALL.into_iter().map(definition).collect()
}

/// The definition for one tool.
pub fn definition(tool: ToolName) -> ToolDefinition {
    match tool {
        ToolName::GetPlantInfo => plant_info::definition(),
        ToolName::CompanionPlanting => companions::definition(),
        ToolName::PlantingCalendar => calendar::definition(),
        ToolName::DiagnosePest => pests::definition(),
        ToolName::SoilRequirements => soil::definition(),
        ToolName::WateringGuide => watering::definition(),
        ToolName::ListVegetables => listing::definition(),
    }
}

/// Schema shared by every tool that takes a single required `plant`.
pub(crate) fn plant_schema(description: &str) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "plant": {
                "type": "string",
                "description": description
            }
        },
        "required": ["plant"]
    })
}
