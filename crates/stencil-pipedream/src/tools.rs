use serde_json::{Value, json};

use crate::client::PipedreamClient;
use crate::error::{PipedreamError, Result};

/// A named remote operation exposed to an agent framework.
///
/// Tools are discovered by name and description, advertise a JSON Schema
/// for their arguments, and execute synchronously against a shared
/// [`PipedreamClient`].
pub trait PipedreamTool {
    /// Display name, e.g. "List Pipedream Apps".
    fn name(&self) -> &str;

    /// Human-readable description for the agent.
    fn description(&self) -> &str;

    /// JSON Schema of the arguments object.
    fn parameters(&self) -> Value;

    /// Run the operation and return the `data` payload of the response.
    fn execute(&self, arguments: &Value) -> Result<Value>;
}

/// All Pipedream tools, sharing one client.
pub fn tools(client: PipedreamClient) -> Vec<Box<dyn PipedreamTool>> {
    vec![
        Box::new(ListAppsTool::new(client.clone())),
        Box::new(ListComponentsTool::new(client.clone())),
        Box::new(GetComponentTool::new(client.clone())),
        Box::new(RunActionTool::new(client.clone())),
        Box::new(DeploySourceTool::new(client)),
    ]
}

/// Pull the `data` field out of a response body.
fn data_field(mut body: Value) -> Result<Value> {
    body.get_mut("data")
        .map(Value::take)
        .ok_or(PipedreamError::MissingField("data"))
}

fn required_str<'a>(
    arguments: &'a Value,
    tool: &'static str,
    field: &'static str,
) -> Result<&'a str> {
    arguments[field]
        .as_str()
        .ok_or_else(|| PipedreamError::InvalidArguments {
            tool,
            reason: format!("missing '{field}' argument"),
        })
}

// ── List apps ──────────────────────────────────────────────────

pub struct ListAppsTool {
    client: PipedreamClient,
}

impl ListAppsTool {
    pub fn new(client: PipedreamClient) -> Self {
        Self { client }
    }
}

impl PipedreamTool for ListAppsTool {
    fn name(&self) -> &str {
        "List Pipedream Apps"
    }

    fn description(&self) -> &str {
        "List available Pipedream apps with optional search query"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query to filter apps (optional)"
                }
            }
        })
    }

    fn execute(&self, arguments: &Value) -> Result<Value> {
        let query = arguments["query"].as_str();
        data_field(self.client.list_apps(query)?)
    }
}

// ── List components ────────────────────────────────────────────

pub struct ListComponentsTool {
    client: PipedreamClient,
}

impl ListComponentsTool {
    pub fn new(client: PipedreamClient) -> Self {
        Self { client }
    }
}

impl PipedreamTool for ListComponentsTool {
    fn name(&self) -> &str {
        "List Pipedream Components"
    }

    fn description(&self) -> &str {
        "List available components for a Pipedream app"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "app": {
                    "type": "string",
                    "description": "App slug to list components for, e.g. 'slack'"
                }
            },
            "required": ["app"]
        })
    }

    fn execute(&self, arguments: &Value) -> Result<Value> {
        let app = required_str(arguments, "list_components", "app")?;
        data_field(self.client.list_components(app)?)
    }
}

// ── Component definition ───────────────────────────────────────

pub struct GetComponentTool {
    client: PipedreamClient,
}

impl GetComponentTool {
    pub fn new(client: PipedreamClient) -> Self {
        Self { client }
    }
}

impl PipedreamTool for GetComponentTool {
    fn name(&self) -> &str {
        "Get Pipedream Component Properties"
    }

    fn description(&self) -> &str {
        "Get component definition and configuration options"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "key": {
                    "type": "string",
                    "description": "Component key, e.g. 'slack-send-message'"
                }
            },
            "required": ["key"]
        })
    }

    fn execute(&self, arguments: &Value) -> Result<Value> {
        let key = required_str(arguments, "get_component", "key")?;
        data_field(self.client.get_component_definition(key)?)
    }
}

// ── Run action ─────────────────────────────────────────────────

pub struct RunActionTool {
    client: PipedreamClient,
}

impl RunActionTool {
    pub fn new(client: PipedreamClient) -> Self {
        Self { client }
    }
}

impl PipedreamTool for RunActionTool {
    fn name(&self) -> &str {
        "Execute Pipedream Action"
    }

    fn description(&self) -> &str {
        "Execute a Pipedream component action with specified inputs"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "component_id": {
                    "type": "string",
                    "description": "ID of the component to execute"
                },
                "configured_props": {
                    "type": "object",
                    "description": "Input properties for the component"
                }
            },
            "required": ["component_id"]
        })
    }

    fn execute(&self, arguments: &Value) -> Result<Value> {
        let component_id = required_str(arguments, "run_action", "component_id")?;
        let props = arguments
            .get("configured_props")
            .cloned()
            .unwrap_or_else(|| json!({}));
        data_field(self.client.run_action(component_id, &props)?)
    }
}

// ── Deploy source ──────────────────────────────────────────────

pub struct DeploySourceTool {
    client: PipedreamClient,
}

impl DeploySourceTool {
    pub fn new(client: PipedreamClient) -> Self {
        Self { client }
    }
}

impl PipedreamTool for DeploySourceTool {
    fn name(&self) -> &str {
        "Deploy Pipedream Source"
    }

    fn description(&self) -> &str {
        "Deploy a Pipedream source component with webhook configuration"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "component_id": {
                    "type": "string",
                    "description": "ID of the component to deploy"
                },
                "webhook_url": {
                    "type": "string",
                    "description": "URL where emitted events will be sent"
                },
                "configured_props": {
                    "type": "object",
                    "description": "Configuration properties for the component"
                }
            },
            "required": ["component_id", "webhook_url"]
        })
    }

    fn execute(&self, arguments: &Value) -> Result<Value> {
        let component_id = required_str(arguments, "deploy_source", "component_id")?;
        let webhook_url = required_str(arguments, "deploy_source", "webhook_url")?;
        let props = arguments
            .get("configured_props")
            .cloned()
            .unwrap_or_else(|| json!({}));
        data_field(self.client.deploy_source(component_id, webhook_url, &props)?)
    }
}
