//! `diagnose_pest`: common pests for a plant plus a prevention checklist.

use veggietools_core::{ToolDefinition, ToolName};
use veggietools_knowledge::PlantRecord;

use crate::capitalize;
use crate::catalog::plant_schema;

const PER_PEST: &str = "Check leaves, stems, and fruits regularly. Early detection is key!";

const PREVENTION: &str = "**Prevention Tips:**\n\
    - Regular inspection\n\
    - Crop rotation\n\
    - Companion planting with pest-repellent plants\n\
    - Maintain healthy soil and proper watering\n\
    - Remove affected leaves promptly\n";

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: ToolName::DiagnosePest.to_string(),
        description: "Get information about common pests for a specific plant".into(),
        input_schema: plant_schema("Name of the plant having pest issues"),
    }
}

pub fn render(record: &PlantRecord) -> String {
    let sections = record
        .common_pests
        .iter()
        .map(|pest| format!("## {}\n{PER_PEST}\n", capitalize(pest)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# Common Pests for {name}\n\n{sections}\n{PREVENTION}",
        name = record.name
    )
}
