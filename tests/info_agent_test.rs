use flight_agents::agent::InfoAgent;
use flight_agents::codec::PrettyJson;
use flight_agents::models::{FlightRecord, InfoPayload, LookupResult};
use flight_agents::store::FlightStore;
use serde_json::Value;
use std::sync::Arc;

fn agent() -> InfoAgent {
    InfoAgent::new(Arc::new(FlightStore::seed()))
}

#[test]
fn test_get_flight_info_normalizes_identifier() {
    let agent = agent();
    let expected = LookupResult::Found(FlightRecord::new("AI456", "11:30 AM", "Mumbai", "On Time"));

    assert_eq!(agent.get_flight_info("ai456"), expected);
    assert_eq!(agent.get_flight_info("  AI456  "), expected);
    assert_eq!(agent.get_flight_info(""), LookupResult::NotFound(String::new()));
}

#[test]
fn test_info_agent_request_found_shape() {
    let reply = agent().info_agent_request(" ai123").unwrap();
    let value: Value = serde_json::from_str(&reply).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(object["flight_number"], "AI123");
    assert_eq!(object["departure_time"], "08:00 AM");
    assert_eq!(object["destination"], "Delhi");
    assert_eq!(object["status"], "Delayed");
    assert!(!object.contains_key("error"));
}

#[test]
fn test_info_agent_request_missing_shape() {
    let reply = agent().info_agent_request("ai999").unwrap();
    let value: Value = serde_json::from_str(&reply).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["flight_number"], "AI999");
    assert_eq!(object["error"], "Flight AI999 not found in database.");
}

#[test]
fn test_info_agent_request_round_trips_to_payload() {
    let agent = agent();

    for identifier in ["AI123", "AI789", "XX1", ""] {
        let reply = agent.info_agent_request(identifier).unwrap();
        let payload: InfoPayload = serde_json::from_str(&reply).unwrap();
        assert_eq!(payload, InfoPayload::from(agent.get_flight_info(identifier)));
    }
}

#[test]
fn test_non_ascii_values_are_not_escaped() {
    let store = FlightStore::from_records(vec![FlightRecord::new("LH1", "07:00", "München", "Pünktlich")]).unwrap();
    let agent = InfoAgent::new(Arc::new(store));

    let reply = agent.info_agent_request("lh1").unwrap();
    assert!(reply.contains("München"));
    assert!(reply.contains("Pünktlich"));
    assert!(!reply.contains("\\u"));
}

#[test]
fn test_pretty_codec_produces_same_document() {
    let store = Arc::new(FlightStore::seed());
    let compact = InfoAgent::new(store.clone()).info_agent_request("AI123").unwrap();
    let pretty = InfoAgent::with_codec(store, Arc::new(PrettyJson)).info_agent_request("AI123").unwrap();

    assert!(pretty.contains('\n'));
    assert!(!compact.contains('\n'));
    assert_eq!(
        serde_json::from_str::<Value>(&compact).unwrap(),
        serde_json::from_str::<Value>(&pretty).unwrap()
    );
}
