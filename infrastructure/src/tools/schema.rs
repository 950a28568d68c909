//! JSON Schema tool converter.
//!
//! [`ToolSchemaPort`] implementation producing OpenAI function-calling
//! entries: `{"type": "function", "function": {name, description, parameters}}`.

use crew_application::ports::tool_schema::ToolSchemaPort;
use crew_domain::{ToolDefinition, ToolSpec};

/// Maps `param_type` to JSON Schema:
/// - `"string"`, `"url"` → `"string"` (`url` adds `"format": "uri"`)
/// - `"number"`, `"integer"`, `"boolean"` → themselves
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
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
            if param.param_type == "url" {
                prop.insert("format".to_string(), serde_json::json!("uri"));
            }
            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                    "additionalProperties": false,
                }
            }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        let mut tools: Vec<&ToolDefinition> = spec.all().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crew_domain::{ToolHandle, agent_tools, tool_spec_for};

    #[test]
    fn test_search_schema() {
        let schema = JsonSchemaToolConverter.tool_to_schema(&ToolHandle::search().definition());

        assert_eq!(schema["type"], "function");
        let function = &schema["function"];
        assert_eq!(function["name"], "search_web");
        assert_eq!(function["parameters"]["type"], "object");
        assert_eq!(
            function["parameters"]["properties"]["search_query"]["type"],
            "string"
        );
        assert_eq!(
            function["parameters"]["properties"]["website"]["format"],
            "uri"
        );

        let required = function["parameters"]["required"].as_array().unwrap();
        assert_eq!(required, &vec![serde_json::json!("search_query")]);
    }

    #[test]
    fn test_docs_tool_has_no_parameters() {
        let schema =
            JsonSchemaToolConverter.tool_to_schema(&ToolHandle::scoped_scrape("https://x.com/docs").definition());
        let params = &schema["function"]["parameters"];
        assert!(params["properties"].as_object().unwrap().is_empty());
        assert!(params["required"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_all_tools_sorted_by_name() {
        let tools = agent_tools("CrewAI");
        let spec = tool_spec_for(&[tools.search, tools.scrape, tools.docs_scrape]);

        let names: Vec<String> = JsonSchemaToolConverter
            .all_tools_schema(&spec)
            .iter()
            .map(|t| t["function"]["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["read_company_docs", "scrape_website", "search_web"]);
    }
}
