use super::{string_arg, Tool, ToolResult};
use crate::agent::InfoAgent;
use crate::models::InfoPayload;
use async_trait::async_trait;
use anyhow::{Result, anyhow};
use serde_json::{json, Value};

/// Exposes the info agent as a callable tool.
pub struct FlightInfoTool {
    agent: InfoAgent,
}

impl FlightInfoTool {
    pub fn new(agent: InfoAgent) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl Tool for FlightInfoTool {
    fn name(&self) -> &str {
        "info_agent"
    }

    fn description(&self) -> &str {
        "Flight lookup by flight number: departure time, destination, status"
    }

    fn available_functions(&self) -> Vec<String> {
        vec![
            "get_flight_info".to_string(),
            "info_agent_request".to_string(),
        ]
    }

    async fn execute(&self, function: &str, args: Value) -> Result<ToolResult> {
        let flight_number = string_arg(&args, "flight_number");

        match function {
            "get_flight_info" => {
                let lookup = self.agent.get_flight_info(flight_number);
                let found = lookup.is_found();
                Ok(ToolResult {
                    success: true,
                    result: serde_json::to_value(InfoPayload::from(lookup))?,
                    metadata: Some(json!({ "found": found })),
                })
            }
            "info_agent_request" => {
                let reply = self.agent.info_agent_request(flight_number)?;
                Ok(ToolResult {
                    success: true,
                    result: Value::String(reply),
                    metadata: Some(json!({ "codec": self.agent.codec().name() })),
                })
            }
            _ => Err(anyhow!("Unknown function: {}", function)),
        }
    }
}
