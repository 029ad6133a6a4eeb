//! Routes validated tool requests to their renderers.
//!
//! The dispatcher is two-tier by construction:
//! - protocol failures (bad arguments, unknown tool) come back as
//!   `Err(ToolError)` from [`Dispatcher::call`];
//! - an unknown plant or an out-of-table zone is not a failure: the result is
//!   ordinary text that explains the problem.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::debug;
use veggietools_core::{CalendarArgs, PlantArgs, ToolCall, ToolError, ToolRequest, ToolResult};
use veggietools_knowledge::{KnowledgeStore, PlantRecord};

use crate::{calendar, companions, listing, pests, plant_info, soil, watering};

/// Runs tools against a shared, read-only [`KnowledgeStore`].
///
/// Cloning is cheap; every clone reads the same store.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: Arc<KnowledgeStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Validate a raw call and run it.
    pub fn call(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let request = ToolRequest::parse(call)?;
        Ok(self.dispatch(&request))
    }

    /// Run an already validated request. Never fails.
    pub fn dispatch(&self, request: &ToolRequest) -> ToolResult {
        debug!(tool = %request.tool(), "Dispatching tool call");

        match request {
            ToolRequest::GetPlantInfo(args) => self.with_plant(args, plant_info::render),
            ToolRequest::CompanionPlanting(args) => self.with_plant(args, companions::render),
            ToolRequest::PlantingCalendar(args) => self.calendar(args),
            ToolRequest::DiagnosePest(args) => self.with_plant(args, pests::render),
            ToolRequest::SoilRequirements(args) => self.with_plant(args, soil::render),
            ToolRequest::WateringGuide(args) => self.with_plant(args, watering::render),
            ToolRequest::ListVegetables => self.list(),
        }
    }

    /// Look up the plant and render it, or fall back to the not-found listing.
    fn with_plant(&self, args: &PlantArgs, render: fn(&PlantRecord) -> String) -> ToolResult {
        let key = args.key();
        match self.store.lookup_plant(&key) {
            Some(record) => {
                ToolResult::text(render(record))
                    .with_structured(json!({ "key": key, "plant": record }))
            }
            None => {
                debug!(plant = %args.plant, "Plant not in knowledge store");
                ToolResult::text(self.plant_not_found(&args.plant))
            }
        }
    }

    fn calendar(&self, args: &CalendarArgs) -> ToolResult {
        let Some((zone, record)) = args
            .zone
            .and_then(|zone| self.store.lookup_zone(zone).map(|record| (zone, record)))
        else {
            debug!(zone = ?args.zone, "Zone outside the hardiness table");
            return ToolResult::text(calendar::INVALID_ZONE);
        };

        let plant = args
            .plant
            .as_ref()
            .and_then(|p| self.store.lookup_plant(&p.key()));
        let text = calendar::render(zone, record, plant, args.plant.is_some());

        ToolResult::text(text).with_structured(json!({
            "zone": zone,
            "firstFrost": record.first_frost,
            "lastFrost": record.last_frost,
            "plant": plant,
        }))
    }

    fn list(&self) -> ToolResult {
        let plants: Vec<Value> = self
            .store
            .plants()
            .map(|(key, record)| {
                json!({
                    "key": key,
                    "name": record.name,
                    "daysToHarvest": record.days_to_harvest,
                })
            })
            .collect();

        ToolResult::text(listing::render(&self.store)).with_structured(json!({ "plants": plants }))
    }

    /// The soft not-found message: the input as given, then every valid key.
    pub fn plant_not_found(&self, input: &str) -> String {
        let keys = self.store.plant_keys().collect::<Vec<_>>().join(", ");
        format!("Plant \"{input}\" not found. Available plants: {keys}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veggietools_core::ToolName;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(KnowledgeStore::builtin()))
    }

    fn text(result: &ToolResult) -> &str {
        result.first_text().expect("text content")
    }

    fn call(tool: &str, args: Value) -> Result<ToolResult, ToolError> {
        dispatcher().call(&ToolCall::new(tool, args))
    }

    #[test]
    fn plant_info_contains_name_companions_and_avoid_for_every_plant() {
        let d = dispatcher();
        for (key, record) in d.store().plants() {
            let result = d.call(&ToolCall::new("get_plant_info", json!({ "plant": key })));
            let result = result.unwrap();
            let out = text(&result);
            assert!(out.contains(record.name), "{key}: missing name");
            for entry in record.companions.iter().chain(record.avoid) {
                assert!(out.contains(entry), "{key}: missing {entry}");
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let upper = call("get_plant_info", json!({"plant": "Tomato"})).unwrap();
        let lower = call("get_plant_info", json!({"plant": "tomato"})).unwrap();
        assert_eq!(text(&upper), text(&lower));

        let shouty = call("soil_requirements", json!({"plant": "BLACK_KRIM_TOMATO"})).unwrap();
        assert!(text(&shouty).contains("Black Krim Tomato"));
    }

    #[test]
    fn unknown_plant_is_soft_not_found() {
        let d = dispatcher();
        for tool in [
            "get_plant_info",
            "companion_planting",
            "diagnose_pest",
            "soil_requirements",
            "watering_guide",
        ] {
            let result = d
                .call(&ToolCall::new(tool, json!({"plant": "dragonfruit"})))
                .unwrap();
            let out = text(&result);
            assert!(out.contains("not found"), "{tool}");
            assert!(out.starts_with("Plant \"dragonfruit\" not found."));
            let keys = d.store().plant_keys().collect::<Vec<_>>().join(", ");
            assert!(out.ends_with(&keys));
            assert!(result.structured_content.is_none());
        }
    }

    #[test]
    fn black_krim_round_trip_strings() {
        let result = call("get_plant_info", json!({"plant": "black_krim_tomato"})).unwrap();
        let out = text(&result);
        assert!(out.contains("Days to Harvest:** 75-85 days"));
        assert!(out.contains("Companion Plants:** basil, carrots, onions, marigold, parsley"));

        let data = result.structured_content.unwrap();
        assert_eq!(data["key"], "black_krim_tomato");
        assert_eq!(data["plant"]["origin"], "Crimea, Ukraine");
    }

    #[test]
    fn every_zone_has_frost_dates() {
        let d = dispatcher();
        for zone in 1..=10 {
            let result = d
                .call(&ToolCall::new("planting_calendar", json!({ "zone": zone })))
                .unwrap();
            let out = text(&result);
            assert!(out.starts_with(&format!("# Planting Calendar for Zone {zone}")));
            let record = d.store().lookup_zone(zone).unwrap();
            assert!(out.contains(&format!("**Last Frost Date:** {}", record.last_frost)));
            assert!(out.contains(&format!("**First Frost Date:** {}", record.first_frost)));
        }
    }

    #[test]
    fn bad_zones_are_soft_validation_failures() {
        for zone in [json!(0), json!(11), json!(4.5), json!("five"), json!(-1)] {
            let result = call("planting_calendar", json!({ "zone": zone })).unwrap();
            assert_eq!(text(&result), calendar::INVALID_ZONE);
        }
        let result = call("planting_calendar", json!({})).unwrap();
        assert_eq!(text(&result), calendar::INVALID_ZONE);
    }

    #[test]
    fn calendar_with_plant_appends_timeline() {
        let result = call("planting_calendar", json!({"zone": 6, "plant": "Basil"})).unwrap();
        let out = text(&result);
        assert!(out.contains("## Basil Planting Timeline"));
        assert!(out.contains("**Days to harvest:** 40-60 days"));

        let data = result.structured_content.unwrap();
        assert_eq!(data["zone"], 6);
        assert_eq!(data["plant"]["name"], "Basil");
    }

    #[test]
    fn calendar_with_unknown_plant_still_answers_zone() {
        let result = call("planting_calendar", json!({"zone": 6, "plant": "kiwi"})).unwrap();
        let out = text(&result);
        assert!(out.contains("**Last Frost Date:** Mar 15-Apr 15"));
        assert!(!out.contains("Planting Timeline"));
        assert!(!out.contains("General Guidelines"));
    }

    #[test]
    fn calendar_with_blank_plant_appends_nothing() {
        let result = call("planting_calendar", json!({"zone": 6, "plant": "   "})).unwrap();
        let out = text(&result);
        assert!(out.contains("**First Frost Date:**"));
        assert!(!out.contains("Planting Timeline"));
        assert!(!out.contains("General Guidelines"));

        let empty = call("planting_calendar", json!({"zone": 6, "plant": ""})).unwrap();
        assert!(text(&empty).contains("General Guidelines"));
    }

    #[test]
    fn list_vegetables_one_line_per_plant() {
        let d = dispatcher();
        let result = d
            .call(&ToolCall::new("list_vegetables", json!({})))
            .unwrap();
        let entries: Vec<_> = text(&result)
            .lines()
            .filter(|l| l.starts_with("- "))
            .collect();
        assert_eq!(entries.len(), d.store().len());
        for (line, (_, record)) in entries.iter().zip(d.store().plants()) {
            assert!(line.contains(record.name));
        }
        assert_eq!(
            result.structured_content.unwrap()["plants"]
                .as_array()
                .unwrap()
                .len(),
            d.store().len()
        );
    }

    #[test]
    fn protocol_errors() {
        let d = dispatcher();
        let missing = ToolCall {
            name: "get_plant_info".into(),
            arguments: None,
        };
        assert!(matches!(
            d.call(&missing),
            Err(ToolError::InvalidArguments(_))
        ));

        assert_eq!(
            call("harvest_moon", json!({})).unwrap_err(),
            ToolError::UnknownTool("harvest_moon".into())
        );

        assert!(matches!(
            call("diagnose_pest", json!({"plant": 42})),
            Err(ToolError::InvalidArguments(_))
        ));
    }

    #[test]
    fn dispatch_covers_every_tool() {
        let d = dispatcher();
        for tool in ToolName::ALL {
            let args = json!({"plant": "tomato", "zone": 5});
            let result = d.call(&ToolCall::new(tool.as_str(), args)).unwrap();
            assert!(!text(&result).is_empty(), "{tool}");
        }
    }
}
