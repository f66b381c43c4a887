use super::{string_arg, Tool, ToolResult};
use crate::agent::QaAgent;
use async_trait::async_trait;
use anyhow::{Result, anyhow};
use serde_json::{json, Value};

pub struct FlightQaTool {
    agent: QaAgent,
}

impl FlightQaTool {
    pub fn new(agent: QaAgent) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl Tool for FlightQaTool {
    fn name(&self) -> &str {
        "qa_agent"
    }

    fn description(&self) -> &str {
        "Answers natural-language questions about a flight's status"
    }

    fn available_functions(&self) -> Vec<String> {
        vec!["respond".to_string()]
    }

    async fn execute(&self, function: &str, args: Value) -> Result<ToolResult> {
        match function {
            "respond" => {
                let query = string_arg(&args, "query");
                let (answer, kind) = self.agent.answer_with_kind(query)?;
                Ok(ToolResult {
                    success: true,
                    result: serde_json::to_value(answer)?,
                    metadata: Some(json!({ "kind": format!("{:?}", kind) })),
                })
            }
            _ => Err(anyhow!("Unknown function: {}", function)),
        }
    }
}
