use crate::agent::extract::QueryExtractor;
use crate::agent::info::InfoAgent;
use crate::codec::JsonCodec;
use crate::models::{Answer, AnswerKind, ExtractionResult, FlightRecord, InfoPayload};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

pub const MISSING_FLIGHT_NUMBER: &str = "Flight number not found in query.";

/// Answers free-text flight questions.
///
/// Extract an identifier, ask the info agent over its JSON reply, then
/// phrase the result. Every string input yields an answer; misses are
/// answers too.
#[derive(Clone, Debug)]
pub struct QaAgent {
    extractor: QueryExtractor,
    info_agent: InfoAgent,
}

impl QaAgent {
    pub fn new(info_agent: InfoAgent) -> Self {
        Self {
            extractor: QueryExtractor::new(),
            info_agent,
        }
    }

    pub fn info_agent(&self) -> &InfoAgent {
        &self.info_agent
    }

    /// The answer envelope, serialized with the info agent's codec.
    pub fn respond(&self, query: &str) -> Result<String> {
        let answer = self.answer(query)?;
        self.codec().serialize(&serde_json::to_value(answer)?)
    }

    pub fn answer(&self, query: &str) -> Result<Answer> {
        Ok(self.answer_with_kind(query)?.0)
    }

    /// Like [`QaAgent::answer`], also reporting which branch produced it.
    pub fn answer_with_kind(&self, query: &str) -> Result<(Answer, AnswerKind)> {
        let identifier = match self.extractor.extract_flight_number(query) {
            ExtractionResult::Identifier(id) => id,
            ExtractionResult::None => {
                return Ok((Answer::new(MISSING_FLIGHT_NUMBER), AnswerKind::ExtractionMiss));
            }
        };

        let reply = self.info_agent.info_agent_request(&identifier)?;
        let payload: InfoPayload = serde_json::from_value(self.codec().parse(&reply)?)?;

        let result = match payload {
            InfoPayload::Missing { error, .. } => (Answer::new(error), AnswerKind::LookupMiss),
            InfoPayload::Found(record) => (Answer::new(format_record(&record)), AnswerKind::Answered),
        };
        debug!("QA agent {:?}: {}", result.1, result.0);
        Ok(result)
    }

    fn codec(&self) -> &Arc<dyn JsonCodec> {
        self.info_agent.codec()
    }
}

pub fn format_record(record: &FlightRecord) -> String {
    format!(
        "Flight {} departs at {} to {}. Current status: {}.",
        record.flight_number, record.departure_time, record.destination, record.status
    )
}
