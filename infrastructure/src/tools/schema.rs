//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing the
//! OpenAI-compatible `function` tool format.

use pecko_application::ports::tool_schema::ToolSchemaPort;
use pecko_domain::tool::entities::ToolDefinition;

/// Handles param_type → JSON Schema type mapping:
/// - `"string"`, `"path"` → `"string"`
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "string" | "path" => "string",
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };

            let mut prop = serde_json::Map::new();
            prop.insert("type".to_string(), serde_json::json!(schema_type));
            prop.insert(
                "description".to_string(),
                serde_json::json!(param.description),
            );
            if let Some(default) = &param.default {
                prop.insert("default".to_string(), default.clone());
            }
            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "type": "function",
            "function": {
                "name": tool.name.as_str(),
                "description": tool.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::default_tool_spec;
    use pecko_domain::{ToolName, ToolSet};

    #[test]
    fn test_write_file_schema() {
        let spec = default_tool_spec();
        let schema = JsonSchemaToolConverter.tool_to_schema(spec.get(ToolName::WriteFile).unwrap());

        assert_eq!(schema["type"], "function");
        assert_eq!(schema["function"]["name"], "write_file");
        let params = &schema["function"]["parameters"];
        assert_eq!(params["type"], "object");
        assert_eq!(params["properties"]["file_path"]["type"], "string");
        assert_eq!(params["properties"]["content"]["type"], "string");
        assert_eq!(params["required"], serde_json::json!(["file_path", "content"]));
    }

    #[test]
    fn test_list_files_default() {
        let spec = default_tool_spec();
        let schema = JsonSchemaToolConverter.tool_to_schema(spec.get(ToolName::ListFiles).unwrap());

        let directory = &schema["function"]["parameters"]["properties"]["directory"];
        assert_eq!(directory["default"], ".");
        assert_eq!(
            schema["function"]["parameters"]["required"],
            serde_json::json!([])
        );
    }

    #[test]
    fn test_tools_schema_keeps_order() {
        let tools = default_tool_spec().filtered(&ToolSet::read_only());
        let schemas = JsonSchemaToolConverter.tools_schema(&tools);

        let names: Vec<_> = schemas
            .iter()
            .map(|s| s["function"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["list_files", "read_file"]);
    }
}
