pub mod extract;
pub mod info;
pub mod qa;

pub use extract::QueryExtractor;
pub use info::InfoAgent;
pub use qa::{format_record, QaAgent, MISSING_FLIGHT_NUMBER};
