use crate::models::{FlightRecord, LookupResult};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Canonical form of a flight identifier: surrounding whitespace trimmed, uppercased.
pub fn canonicalize(identifier: &str) -> String {
    identifier.trim().to_uppercase()
}

/// Read-only table of flights keyed by canonical identifier.
///
/// Built once at startup and never mutated afterwards, so a shared
/// reference can be handed to any number of concurrent readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightStore {
    flights: HashMap<String, FlightRecord>,
}

#[derive(Deserialize)]
struct DatasetFile {
    #[serde(default)]
    flights: Vec<FlightRecord>,
}

impl FlightStore {
    /// Builds a store, canonicalizing each record's flight number.
    ///
    /// Fails on a blank flight number or when two records share a
    /// canonical identifier.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = FlightRecord>,
    {
        let mut flights = HashMap::new();

        for mut record in records {
            let key = canonicalize(&record.flight_number);
            if key.is_empty() {
                return Err(anyhow!("Flight record with blank flight number: {:?}", record));
            }
            record.flight_number = key.clone();

            if flights.insert(key.clone(), record).is_some() {
                return Err(anyhow!("Duplicate flight number in dataset: {}", key));
            }
        }

        debug!("Flight store built with {} records", flights.len());
        Ok(Self { flights })
    }

    /// The reference dataset.
    pub fn seed() -> Self {
        let flights = seed_records()
            .into_iter()
            .map(|record| (record.flight_number.clone(), record))
            .collect();
        Self { flights }
    }

    /// Loads a dataset file. `.json` holds an array of records, `.toml`
    /// holds `[[flights]]` tables.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file {}", path.display()))?;

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let records: Vec<FlightRecord> = match extension.as_str() {
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON dataset {}", path.display()))?,
            "toml" => {
                let file: DatasetFile = toml::from_str(&content)
                    .with_context(|| format!("Invalid TOML dataset {}", path.display()))?;
                file.flights
            }
            other => return Err(anyhow!("Unsupported dataset format '{}': {}", other, path.display())),
        };

        let store = Self::from_records(records)?;
        info!("📦 Loaded {} flights from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn lookup(&self, identifier: &str) -> LookupResult {
        let key = canonicalize(identifier);
        self.lookup_canonical(key)
    }

    /// Lookup for an identifier the caller has already canonicalized.
    pub(crate) fn lookup_canonical(&self, key: String) -> LookupResult {
        match self.flights.get(&key) {
            Some(record) => LookupResult::Found(record.clone()),
            None => LookupResult::NotFound(key),
        }
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Records ordered by flight number.
    pub fn records(&self) -> Vec<&FlightRecord> {
        let mut records: Vec<&FlightRecord> = self.flights.values().collect();
        records.sort_by(|a, b| a.flight_number.cmp(&b.flight_number));
        records
    }
}

impl Default for FlightStore {
    fn default() -> Self {
        Self::seed()
    }
}

pub fn seed_records() -> Vec<FlightRecord> {
    vec![
        FlightRecord::new("AI123", "08:00 AM", "Delhi", "Delayed"),
        FlightRecord::new("AI456", "11:30 AM", "Mumbai", "On Time"),
        FlightRecord::new("AI789", "05:45 PM", "Bengaluru", "Boarding"),
    ]
}
