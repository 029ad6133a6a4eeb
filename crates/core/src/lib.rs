//! # VeggieTools Core
//!
//! Domain types shared by every VeggieTools crate: the closed set of tool
//! names, the typed argument records each tool accepts, the result envelope
//! returned to callers, and the error types that separate protocol failures
//! from ordinary (soft) lookup misses.
//!
//! This crate has no framework dependencies. The knowledge tables, the
//! dispatcher and the HTTP transport all depend inward on it.

pub mod error;
pub mod tool;

pub use error::{Error, Result, ToolError};
pub use tool::{
    CalendarArgs, Content, PlantArgs, ToolCall, ToolDefinition, ToolName, ToolRequest, ToolResult,
};
