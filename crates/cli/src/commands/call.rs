//! `veggietools call`: Run one tool in-process.

use std::sync::Arc;

use veggietools_core::{Result, ToolCall, ToolResult};
use veggietools_knowledge::KnowledgeStore;
use veggietools_tools::Dispatcher;

pub fn run(tool: &str, args: &str) -> Result<()> {
    let result = execute(tool, args)?;

    if let Some(text) = result.first_text() {
        println!("{text}");
    }

    Ok(())
}

/// Parse `--args` as JSON and dispatch against the built-in store.
fn execute(tool: &str, args: &str) -> Result<ToolResult> {
    let arguments: serde_json::Value = serde_json::from_str(args)?;

    let dispatcher = Dispatcher::new(Arc::new(KnowledgeStore::builtin()));
    Ok(dispatcher.call(&ToolCall::new(tool, arguments))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veggietools_core::{Error, ToolError};

    #[test]
    fn runs_tool_from_json_args() {
        let result = execute("get_plant_info", r#"{"plant":"basil"}"#).unwrap();
        assert!(result.first_text().unwrap().starts_with("# Basil Growing Guide"));
        assert!(run("get_plant_info", r#"{"plant":"basil"}"#).is_ok());
    }

    #[test]
    fn default_args_list_vegetables() {
        let result = execute("list_vegetables", "{}").unwrap();
        assert!(result.first_text().unwrap().contains("**Basil**"));
    }

    #[test]
    fn invalid_json_args_is_serialization_error() {
        let err = execute("get_plant_info", "{plant: basil}").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(run("get_plant_info", "not json").is_err());
    }

    #[test]
    fn unknown_tool_is_tool_error() {
        let err = execute("prune_hedges", "{}").unwrap_err();
        assert!(matches!(
            err,
            Error::Tool(ToolError::UnknownTool(name)) if name == "prune_hedges"
        ));
    }
}
