//! Plant records.

use serde::Serialize;

/// Everything the store knows about one plant.
///
/// All ranges are opaque display strings ("60-85 days", "6.0-6.8"); nothing
/// parses them. Companion and avoid entries are free-text labels and need not
/// match any key in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub name: &'static str,
    pub planting_depth: &'static str,
    pub spacing: &'static str,
    pub days_to_germination: &'static str,
    pub days_to_harvest: &'static str,
    #[serde(rename = "soilPH")]
    pub soil_ph: &'static str,
    pub sun_requirement: &'static str,
    pub watering_needs: &'static str,
    pub companions: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub common_pests: &'static [&'static str],
    pub tips: &'static str,

    /// Cultivar details, present only on specialty varieties.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub variety: Option<Variety>,
}

/// Extra fields carried by named cultivars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variety {
    #[serde(rename = "type")]
    pub cultivar_type: &'static str,
    pub origin: &'static str,
    pub fruit_size: &'static str,
    pub fruit_color: &'static str,
    /// Only peppers carry a heat rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_level: Option<&'static str>,
    pub growth_habit: &'static str,
}

impl PlantRecord {
    /// The list fields paired with their names, for invariant checks.
    pub(crate) fn lists(&self) -> [(&'static str, &'static [&'static str]); 3] {
        [
            ("companions", self.companions),
            ("avoid", self.avoid),
            ("commonPests", self.common_pests),
        ]
    }
}
