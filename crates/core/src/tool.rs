//! Tool names, typed tool requests, and the result envelope.
//!
//! Callers send a tool name plus a loosely-typed JSON argument bag. That pair
//! is parsed exactly once, at the boundary, into a [`ToolRequest`]: one
//! variant per tool, each carrying its own argument record. Everything past
//! that point matches exhaustively on the closed [`ToolName`] set.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::ToolError;

/// The closed set of tools the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    GetPlantInfo,
    CompanionPlanting,
    PlantingCalendar,
    DiagnosePest,
    SoilRequirements,
    WateringGuide,
    ListVegetables,
}

impl ToolName {
    /// Every tool, in catalog order.
    pub const ALL: [ToolName; 7] = [
        ToolName::GetPlantInfo,
        ToolName::CompanionPlanting,
        ToolName::PlantingCalendar,
        ToolName::DiagnosePest,
        ToolName::SoilRequirements,
        ToolName::WateringGuide,
        ToolName::ListVegetables,
    ];

    /// The wire name of this tool (e.g., "get_plant_info").
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetPlantInfo => "get_plant_info",
            ToolName::CompanionPlanting => "companion_planting",
            ToolName::PlantingCalendar => "planting_calendar",
            ToolName::DiagnosePest => "diagnose_pest",
            ToolName::SoilRequirements => "soil_requirements",
            ToolName::WateringGuide => "watering_guide",
            ToolName::ListVegetables => "list_vegetables",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

/// A raw request to run a tool, as it arrives over the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to execute
    #[serde(default)]
    pub name: String,

    /// The argument bag. `None` means the caller sent no arguments at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Value>,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments: Some(arguments),
        }
    }
}

/// Arguments for every tool that looks up a single plant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantArgs {
    /// The plant as the caller typed it. Kept verbatim for not-found messages.
    pub plant: String,
}

impl PlantArgs {
    pub fn new(plant: impl Into<String>) -> Self {
        Self {
            plant: plant.into(),
        }
    }

    /// The normalized table key: trimmed and lowercased.
    pub fn key(&self) -> String {
        self.plant.trim().to_lowercase()
    }
}

/// Arguments for `planting_calendar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarArgs {
    /// The requested zone, or `None` when it was absent or not an integer.
    /// Range checking happens against the zone table, not here.
    pub zone: Option<i64>,

    /// Optional plant to add a timeline for.
    pub plant: Option<PlantArgs>,
}

/// A validated tool request. One variant per [`ToolName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    GetPlantInfo(PlantArgs),
    CompanionPlanting(PlantArgs),
    PlantingCalendar(CalendarArgs),
    DiagnosePest(PlantArgs),
    SoilRequirements(PlantArgs),
    WateringGuide(PlantArgs),
    ListVegetables,
}

impl ToolRequest {
    /// Validate a raw call into a typed request.
    ///
    /// Fails with `InvalidArguments` when the argument bag is missing, is not
    /// an object, or lacks a required string field, and with `UnknownTool`
    /// for names outside [`ToolName::ALL`].
    pub fn parse(call: &ToolCall) -> Result<Self, ToolError> {
        let arguments = match &call.arguments {
            None | Some(Value::Null) => {
                return Err(ToolError::InvalidArguments("Missing arguments".into()));
            }
            Some(value) => value,
        };

        let tool: ToolName = call.name.parse()?;

        let args = arguments.as_object().ok_or_else(|| {
            ToolError::InvalidArguments(format!("Arguments for '{tool}' must be a JSON object"))
        })?;

        let request = match tool {
            ToolName::GetPlantInfo => ToolRequest::GetPlantInfo(required_plant(args)?),
            ToolName::CompanionPlanting => ToolRequest::CompanionPlanting(required_plant(args)?),
            ToolName::PlantingCalendar => ToolRequest::PlantingCalendar(CalendarArgs {
                zone: args.get("zone").and_then(integer_zone),
                plant: optional_plant(args)?,
            }),
            ToolName::DiagnosePest => ToolRequest::DiagnosePest(required_plant(args)?),
            ToolName::SoilRequirements => ToolRequest::SoilRequirements(required_plant(args)?),
            ToolName::WateringGuide => ToolRequest::WateringGuide(required_plant(args)?),
            ToolName::ListVegetables => ToolRequest::ListVegetables,
        };

        Ok(request)
    }

    /// The tool this request targets.
    pub fn tool(&self) -> ToolName {
        match self {
            ToolRequest::GetPlantInfo(_) => ToolName::GetPlantInfo,
            ToolRequest::CompanionPlanting(_) => ToolName::CompanionPlanting,
            ToolRequest::PlantingCalendar(_) => ToolName::PlantingCalendar,
            ToolRequest::DiagnosePest(_) => ToolName::DiagnosePest,
            ToolRequest::SoilRequirements(_) => ToolName::SoilRequirements,
            ToolRequest::WateringGuide(_) => ToolName::WateringGuide,
            ToolRequest::ListVegetables => ToolName::ListVegetables,
        }
    }
}

fn required_plant(args: &Map<String, Value>) -> Result<PlantArgs, ToolError> {
    args.get("plant")
        .and_then(Value::as_str)
        .map(PlantArgs::new)
        .ok_or_else(|| ToolError::InvalidArguments("Missing 'plant' argument".into()))
}

/// An empty or null `plant` counts as not given. A whitespace-only name is
/// given, and simply matches no plant.
fn optional_plant(args: &Map<String, Value>) -> Result<Option<PlantArgs>, ToolError> {
    match args.get("plant") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(PlantArgs::new(s.as_str()))),
        Some(_) => Err(ToolError::InvalidArguments("'plant' must be a string".into())),
    }
}

/// Accepts JSON integers and whole-valued floats (`7.0`). Strings, fractions
/// and everything else map to `None`.
fn integer_zone(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
}

/// One block of tool output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

/// The envelope returned for every successful tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<Content>,

    /// The looked-up record as JSON, for callers that would rather not
    /// reparse the text.
    #[serde(
        rename = "structuredContent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub structured_content: Option<Value>,
}

impl ToolResult {
    /// A single-text-block result.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            structured_content: None,
        }
    }

    pub fn with_structured(mut self, value: Value) -> Self {
        self.structured_content = Some(value);
        self
    }

    /// The first text block, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|c| match c {
            Content::Text { text } => Some(text.as_str()),
        })
    }
}

/// Discovery metadata for one tool, as listed by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,

    /// JSON Schema describing the tool's arguments.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}
