use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured data for one flight. Field names double as the wire keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub departure_time: String,
    pub destination: String,
    pub status: String,
}

impl FlightRecord {
    pub fn new(
        flight_number: impl Into<String>,
        departure_time: impl Into<String>,
        destination: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            departure_time: departure_time.into(),
            destination: destination.into(),
            status: status.into(),
        }
    }
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} at {} ({})",
            self.flight_number, self.destination, self.departure_time, self.status
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(FlightRecord),
    /// Carries the canonical identifier that missed.
    NotFound(String),
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Identifier(String),
    None,
}

impl ExtractionResult {
    pub fn identifier(&self) -> Option<&str> {
        match self {
            ExtractionResult::Identifier(id) => Some(id),
            ExtractionResult::None => None,
        }
    }
}

/// The only envelope the QA pipeline hands back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
}

impl Answer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self { answer: answer.into() }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.answer)
    }
}

/// Wire form of a lookup, as emitted by the info agent.
///
/// Untagged: a hit carries the four record keys, a miss carries
/// `flight_number` and `error`. Neither shape parses as the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoPayload {
    Found(FlightRecord),
    Missing { flight_number: String, error: String },
}

impl InfoPayload {
    pub fn missing(flight_number: &str) -> Self {
        InfoPayload::Missing {
            flight_number: flight_number.to_string(),
            error: format!("Flight {} not found in database.", flight_number),
        }
    }
}

impl From<LookupResult> for InfoPayload {
    fn from(result: LookupResult) -> Self {
        match result {
            LookupResult::Found(record) => InfoPayload::Found(record),
            LookupResult::NotFound(id) => InfoPayload::missing(&id),
        }
    }
}

/// Which branch of the QA pipeline produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Answered,
    LookupMiss,
    ExtractionMiss,
}

#[derive(Clone, Debug, Default)]
pub struct ResponseMetrics {
    pub total_requests: u64,
    pub answered: u64,
    pub lookup_misses: u64,
    pub extraction_misses: u64,
}

impl ResponseMetrics {
    pub fn record(&mut self, kind: AnswerKind) {
        self.total_requests += 1;
        match kind {
            AnswerKind::Answered => self.answered += 1,
            AnswerKind::LookupMiss => self.lookup_misses += 1,
            AnswerKind::ExtractionMiss => self.extraction_misses += 1,
        }
    }

    pub fn hit_rate(&self) -> f32 {
        if self.total_requests == 0 {
            return 0.0;
        }
        self.answered as f32 / self.total_requests as f32
    }
}
