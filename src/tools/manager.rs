use super::{FlightInfoTool, FlightQaTool, Tool, ToolCall, ToolResult};
use crate::agent::QaAgent;
use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, debug};

pub struct ToolManager {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolManager {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Registers both agents as tools.
    pub fn for_agents(qa_agent: &QaAgent) -> Self {
        let mut manager = Self::new();
        manager.register(FlightInfoTool::new(qa_agent.info_agent().clone()));
        manager.register(FlightQaTool::new(qa_agent.clone()));
        manager
    }

    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        let name = tool.name().to_string();
        debug!("Registered tool: {}", name);
        self.tools.insert(name, Arc::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// `(name, description, functions)` for every registered tool, by name.
    pub fn list_tools(&self) -> Vec<(String, String, Vec<String>)> {
        self.tools
            .values()
            .map(|t| (t.name().to_string(), t.description().to_string(), t.available_functions()))
            .collect()
    }

    pub async fn execute_tool(&self, tool_name: &str, function: &str, args: serde_json::Value) -> Result<ToolResult> {
        info!("🔧 Executing tool: {} -> {}", tool_name, function);
        debug!("Tool arguments: {}", args);

        let tool = self
            .get(tool_name)
            .ok_or_else(|| anyhow::anyhow!("Unknown tool: {}", tool_name))?;

        tool.execute(function, args).await
    }

    pub async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        self.execute_tool(&call.tool_name, &call.function, call.arguments.clone()).await
    }
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}
