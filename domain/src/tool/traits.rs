//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async ToolExecutorPort is defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        // Check that all required parameters are present
        for param in &definition.parameters {
            if param.required && !call.arguments.contains_key(&param.name) {
                return Err(format!(
                    "Missing required parameter '{}' for tool '{}'",
                    param.name, definition.name
                ));
            }
        }

        // Every provided argument must be a known parameter of the right shape
        for (arg_name, value) in &call.arguments {
            let Some(param) = definition.parameter(arg_name) else {
                return Err(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                ));
            };

            if matches!(param.param_type.as_str(), "string" | "path") && !value.is_string() {
                return Err(format!(
                    "Parameter '{}' for tool '{}' must be a string",
                    arg_name, definition.name
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::{ToolName, ToolParameter};

    fn write_definition() -> ToolDefinition {
        ToolDefinition::new(ToolName::WriteFile, "write")
            .with_parameter(ToolParameter::new("file_path", "Path", true).with_type("path"))
            .with_parameter(ToolParameter::new("content", "Content", true))
    }

    #[test]
    fn test_validator_missing_required() {
        let call = ToolCall::new("c1", "write_file").with_arg("file_path", "a.txt");
        let result = DefaultToolValidator.validate(&call, &write_definition());
        assert!(result.unwrap_err().contains("Missing required parameter 'content'"));
    }

    #[test]
    fn test_validator_unknown_param() {
        let call = ToolCall::new("c1", "write_file")
            .with_arg("file_path", "a.txt")
            .with_arg("content", "x")
            .with_arg("append", true);
        let result = DefaultToolValidator.validate(&call, &write_definition());
        assert!(result.unwrap_err().contains("Unknown parameter 'append'"));
    }

    #[test]
    fn test_validator_wrong_type() {
        let call = ToolCall::new("c1", "write_file")
            .with_arg("file_path", 42)
            .with_arg("content", "x");
        let result = DefaultToolValidator.validate(&call, &write_definition());
        assert!(result.unwrap_err().contains("must be a string"));
    }

    #[test]
    fn test_validator_valid_call() {
        let call = ToolCall::new("c1", "write_file")
            .with_arg("file_path", "a.txt")
            .with_arg("content", "hello");
        assert!(DefaultToolValidator.validate(&call, &write_definition()).is_ok());
    }
}
