pub mod flight_info;
pub mod flight_qa;
pub mod manager;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use async_trait::async_trait;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub tool_name: String,
    pub function: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    pub result: serde_json::Value,
    pub metadata: Option<serde_json::Value>,
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn available_functions(&self) -> Vec<String>;
    async fn execute(&self, function: &str, args: serde_json::Value) -> Result<ToolResult>;
}

/// String argument lookup; missing or non-string values read as "".
pub(crate) fn string_arg<'a>(args: &'a serde_json::Value, key: &str) -> &'a str {
    args.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

pub use flight_info::FlightInfoTool;
pub use flight_qa::FlightQaTool;
pub use manager::ToolManager;
