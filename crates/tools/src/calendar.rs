//! `planting_calendar`: frost dates for a zone, with optional plant timing.

use serde_json::json;
use veggietools_core::{ToolDefinition, ToolName};
use veggietools_knowledge::{PlantRecord, ZoneRecord};

/// Returned, as ordinary text, for a missing, non-integer or out-of-table zone.
pub const INVALID_ZONE: &str =
    "Invalid zone. Please provide a USDA Hardiness Zone between 1 and 10.";

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: ToolName::PlantingCalendar.to_string(),
        description: "Get planting timing recommendations based on hardiness zone".into(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "zone": {
                    "type": "number",
                    "description": "USDA Hardiness Zone (1-10)",
                    "minimum": 1,
                    "maximum": 10
                },
                "plant": {
                    "type": "string",
                    "description": "Optional: specific plant name for detailed timing"
                }
            },
            "required": ["zone"]
        }),
    }
}

/// Render the calendar for `zone`.
///
/// `plant` is the looked-up record when the caller named a plant the store
/// knows. `plant_requested` distinguishes "no plant given" (general
/// guidelines are appended) from "plant given but unknown" (nothing is
/// appended).
pub fn render(
    zone: i64,
    record: &ZoneRecord,
    plant: Option<&PlantRecord>,
    plant_requested: bool,
) -> String {
    let mut out = format!(
        "# Planting Calendar for Zone {zone}\n\n\
         **Last Frost Date:** {last}\n\
         **First Frost Date:** {first}\n\n",
        last = record.last_frost,
        first = record.first_frost,
    );

    match plant {
        Some(info) => out.push_str(&format!(
            "## {name} Planting Timeline\n\n\
             **Start seeds indoors:** 4-6 weeks before last frost\n\
             **Transplant outdoors:** After last frost when soil is warm\n\
             **Direct sow:** 1-2 weeks after last frost\n\
             **Days to germination:** {germination}\n\
             **Days to harvest:** {harvest}\n",
            name = info.name,
            germination = info.days_to_germination,
            harvest = info.days_to_harvest,
        )),
        None if !plant_requested => out.push_str(
            "**General Guidelines:**\n\
             - Start cool-season crops (lettuce, peas) 2-4 weeks before last frost\n\
             - Start warm-season crops (tomatoes, peppers) after last frost\n\
             - Plan fall crops by counting back from first frost date\n",
        ),
        None => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use veggietools_knowledge::KnowledgeStore;

    #[test]
    fn zone_only_gets_general_guidelines() {
        let store = KnowledgeStore::builtin();
        let text = render(5, store.lookup_zone(5).unwrap(), None, false);

        assert!(text.starts_with("# Planting Calendar for Zone 5\n\n"));
        assert!(text.contains("**Last Frost Date:** Apr 1-Apr 30\n"));
        assert!(text.contains("**First Frost Date:** Oct 15-Oct 30\n"));
        assert!(text.contains("**General Guidelines:**"));
        assert!(!text.contains("Planting Timeline"));
    }

    #[test]
    fn known_plant_gets_timeline() {
        let store = KnowledgeStore::builtin();
        let text = render(
            7,
            store.lookup_zone(7).unwrap(),
            store.lookup_plant("pepper"),
            true,
        );

        assert!(text.contains("## Pepper Planting Timeline"));
        assert!(text.contains("**Days to germination:** 8-25 days"));
        assert!(text.contains("**Days to harvest:** 60-90 days"));
        assert!(!text.contains("General Guidelines"));
    }

    #[test]
    fn unknown_plant_appends_nothing() {
        let store = KnowledgeStore::builtin();
        let text = render(3, store.lookup_zone(3).unwrap(), None, true);
        assert!(text.ends_with("**First Frost Date:** Sep 30-Oct 15\n\n"));
    }
}
