use anyhow::Result;
use serde_json::Value;

/// Serialization boundary between the agents.
///
/// The agents only ever hand `serde_json::Value`s across this trait, so a
/// codec decides layout (compact or pretty) without touching pipeline logic.
/// Non-ASCII text is written as-is, never `\u` escaped.
pub trait JsonCodec: Send + Sync {
    fn name(&self) -> &str;
    fn serialize(&self, value: &Value) -> Result<String>;
    fn parse(&self, text: &str) -> Result<Value>;
}

/// Single-line output. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactJson;

impl JsonCodec for CompactJson {
    fn name(&self) -> &str {
        "compact"
    }

    fn serialize(&self, value: &Value) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    fn parse(&self, text: &str) -> Result<Value> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson;

impl JsonCodec for PrettyJson {
    fn name(&self) -> &str {
        "pretty"
    }

    fn serialize(&self, value: &Value) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    fn parse(&self, text: &str) -> Result<Value> {
        Ok(serde_json::from_str(text)?)
    }
}
