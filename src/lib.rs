//! # flight-agents - Flight status question answering
//!
//! Two cooperating agents answer free-text questions about flights:
//!
//! - [`InfoAgent`] resolves a flight number against an immutable
//!   [`FlightStore`] and replies in JSON.
//! - [`QaAgent`] pulls the flight number out of the question, asks the
//!   info agent, and phrases an `{"answer": ...}` envelope.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use flight_agents::{FlightStore, InfoAgent, QaAgent};
//!
//! fn main() -> anyhow::Result<()> {
//!     let info_agent = InfoAgent::new(Arc::new(FlightStore::seed()));
//!     let qa_agent = QaAgent::new(info_agent);
//!
//!     let reply = qa_agent.respond("When does Flight AI123 depart?")?;
//!     println!("{}", reply);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod codec;
pub mod config;
pub mod models;
pub mod store;
pub mod tools;
pub mod utils;

// Re-export commonly used types for convenience
pub use agent::{InfoAgent, QaAgent, QueryExtractor};
pub use codec::{CompactJson, JsonCodec, PrettyJson};
pub use config::Config;
pub use models::{Answer, AnswerKind, ExtractionResult, FlightRecord, InfoPayload, LookupResult, ResponseMetrics};
pub use store::FlightStore;
pub use tools::{Tool, ToolCall, ToolManager, ToolResult};
