//! `watering_guide`: how much and how often to water a plant.

use veggietools_core::{ToolDefinition, ToolName};
use veggietools_knowledge::PlantRecord;

use crate::catalog::plant_schema;

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: ToolName::WateringGuide.to_string(),
        description: "Get watering schedule and requirements for a plant".into(),
        input_schema: plant_schema("Name of the plant"),
    }
}

pub fn render(record: &PlantRecord) -> String {
    format!(
        "# Watering Guide for {name}\n\n\
         **Watering Requirements:** {needs}\n\n\
         **Best Practices:**\n\
         - Water in the morning to reduce disease risk\n\
         - Water at soil level, avoid wetting foliage\n\
         - Use mulch to retain moisture\n\
         - Adjust based on rainfall and temperature\n\
         - Deep, infrequent watering encourages strong roots\n\
         - Check soil moisture 2-3 inches deep before watering\n",
        name = record.name,
        needs = record.watering_needs,
    )
}
