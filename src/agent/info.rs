use crate::codec::{CompactJson, JsonCodec};
use crate::models::{InfoPayload, LookupResult};
use crate::store::{canonicalize, FlightStore};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// Resolves flight identifiers against the store.
///
/// Cheap to clone; clones share the same store and codec.
#[derive(Clone)]
pub struct InfoAgent {
    store: Arc<FlightStore>,
    codec: Arc<dyn JsonCodec>,
}

impl std::fmt::Debug for InfoAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfoAgent")
            .field("flights", &self.store.len())
            .field("codec", &self.codec.name())
            .finish()
    }
}

impl InfoAgent {
    pub fn new(store: Arc<FlightStore>) -> Self {
        Self::with_codec(store, Arc::new(CompactJson))
    }

    pub fn with_codec(store: Arc<FlightStore>, codec: Arc<dyn JsonCodec>) -> Self {
        Self { store, codec }
    }

    pub fn store(&self) -> &FlightStore {
        &self.store
    }

    pub fn codec(&self) -> &Arc<dyn JsonCodec> {
        &self.codec
    }

    pub fn get_flight_info(&self, identifier: &str) -> LookupResult {
        let key = canonicalize(identifier);
        let result = self.store.lookup_canonical(key);
        match &result {
            LookupResult::Found(record) => debug!("Info agent hit: {}", record.flight_number),
            LookupResult::NotFound(id) => debug!("Info agent miss: '{}'", id),
        }
        result
    }

    /// Lookup rendered as the info agent's JSON reply.
    pub fn info_agent_request(&self, identifier: &str) -> Result<String> {
        let payload = InfoPayload::from(self.get_flight_info(identifier));
        self.codec.serialize(&serde_json::to_value(payload)?)
    }
}
