use reqwest::Method;
use reqwest::blocking::Client;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{PipedreamError, Result};

pub const PIPEDREAM_API_BASE: &str = "https://api.pipedream.com/v1/connect";

/// Client for the Pipedream Connect API.
///
/// Holds the bearer token for its lifetime and attaches it to every
/// outbound request. Cheap to clone; each tool keeps its own handle to a
/// shared instance.
#[derive(Clone)]
pub struct PipedreamClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PipedreamClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: PIPEDREAM_API_BASE.into(),
        }
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// List available apps, optionally filtered by a search query.
    pub fn list_apps(&self, query: Option<&str>) -> Result<Value> {
        let params: Vec<(&str, &str)> = query.map(|q| vec![("q", q)]).unwrap_or_default();
        self.request(Method::GET, "/apps", &params, None)
    }

    /// List available components for an app.
    pub fn list_components(&self, app: &str) -> Result<Value> {
        self.request(Method::GET, "/actions", &[("app", app)], None)
    }

    /// Get a component definition and its configurable props.
    pub fn get_component_definition(&self, key: &str) -> Result<Value> {
        self.request(Method::GET, &format!("/components/{key}"), &[], None)
    }

    /// Execute a component action.
    pub fn run_action(&self, component_id: &str, configured_props: &Value) -> Result<Value> {
        self.request(
            Method::POST,
            "/actions/run",
            &[],
            Some(json!({
                "id": component_id,
                "configured_props": configured_props,
            })),
        )
    }

    /// Deploy a source component with a webhook destination.
    pub fn deploy_source(
        &self,
        component_id: &str,
        webhook_url: &str,
        configured_props: &Value,
    ) -> Result<Value> {
        self.request(
            Method::POST,
            "/triggers/deploy",
            &[],
            Some(json!({
                "id": component_id,
                "webhook_url": webhook_url,
                "configured_props": configured_props,
            })),
        )
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value> {
        debug!(%method, path, "sending pipedream api request");

        let mut req = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(ref body) = body {
            req = req.json(body);
        }

        let resp = req.send()?;
        if !resp.status().is_success() {
            let text = resp.text().unwrap_or_default();
            return Err(PipedreamError::ApiRequestFailed(text));
        }

        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|e| PipedreamError::InvalidResponse(e.to_string()))
    }
}
