use crate::models::ExtractionResult;
use tracing::debug;

const KEYWORD: &[u8] = b"flight";

/// Pulls a flight identifier out of free text.
///
/// Scans for the keyword `flight` (any case), skips optional whitespace and
/// captures the following run of ASCII letters and digits. The first
/// position where that succeeds wins. A bare identifier with no preceding
/// keyword is not recognised.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryExtractor;

impl QueryExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_flight_number(&self, query: &str) -> ExtractionResult {
        let bytes = query.as_bytes();
        let mut start = 0;

        while let Some(offset) = find_keyword(&bytes[start..]) {
            let keyword_end = start + offset + KEYWORD.len();
            // Keyword bytes are ASCII, so keyword_end is a char boundary.
            if let Some(token) = token_after(&query[keyword_end..]) {
                let identifier = token.to_ascii_uppercase();
                debug!("Extracted flight identifier {}", identifier);
                return ExtractionResult::Identifier(identifier);
            }
            start += offset + 1;
        }

        debug!("No flight identifier in query");
        ExtractionResult::None
    }
}

fn find_keyword(haystack: &[u8]) -> Option<usize> {
    if haystack.len() < KEYWORD.len() {
        return None;
    }
    haystack
        .windows(KEYWORD.len())
        .position(|window| window.eq_ignore_ascii_case(KEYWORD))
}

/// Whitespace (any amount, including none) then one or more ASCII alphanumerics.
fn token_after(rest: &str) -> Option<&str> {
    let trimmed = rest.trim_start_matches(char::is_whitespace);
    let len = trimmed
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();

    if len == 0 {
        None
    } else {
        Some(&trimmed[..len])
    }
}
