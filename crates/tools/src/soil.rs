//! `soil_requirements`: pH, sun, and bed preparation.

use veggietools_core::{ToolDefinition, ToolName};
use veggietools_knowledge::PlantRecord;

use crate::catalog::plant_schema;

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: ToolName::SoilRequirements.to_string(),
        description: "Get soil pH and preparation requirements for a plant".into(),
        input_schema: plant_schema("Name of the plant"),
    }
}

pub fn render(record: &PlantRecord) -> String {
    format!(
        "# Soil Requirements for {name}\n\n\
         **Optimal pH Range:** {ph}\n\
         **Sun Requirement:** {sun}\n\n\
         **Soil Preparation:**\n\
         - Test soil pH and adjust if needed\n\
         - Add compost or aged manure for nutrients\n\
         - Ensure good drainage\n\
         - Loosen soil to appropriate depth ({depth} for seeds)\n\
         - Consider raised beds for heavy or clay soils\n",
        name = record.name,
        ph = record.soil_ph,
        sun = record.sun_requirement,
        depth = record.planting_depth,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use veggietools_knowledge::KnowledgeStore;

    #[test]
    fn references_planting_depth() {
        let store = KnowledgeStore::builtin();
        let text = render(store.lookup_plant("cucumber").unwrap());

        assert!(text.starts_with("# Soil Requirements for Cucumber\n\n"));
        assert!(text.contains("**Optimal pH Range:** 6.0-7.0\n"));
        assert!(text.contains("**Sun Requirement:** Full sun\n"));
        assert!(text.contains("(0.5-1 inch for seeds)"));
    }
}
