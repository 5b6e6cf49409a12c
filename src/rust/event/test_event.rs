use super::*;

#[test]
fn test_change_event_decodes() {
    let event =
        ControlEvent::from_json(r#"{"type":"change","symbol":"tempo_out","value":120.5}"#).unwrap();

    assert_eq!(
        event,
        ControlEvent::Change {
            symbol: "tempo_out".to_string(),
            value: PortValue::Number(120.5),
        }
    );
}

#[test]
fn test_start_event_preserves_port_order() {
    let raw = r#"{
        "type": "start",
        "ports": [
            {"symbol": "gain", "value": 0.8},
            {"symbol": "tempo_out", "value": 90},
            {"symbol": "mix", "value": "50%"}
        ]
    }"#;

    let event = ControlEvent::from_json(raw).unwrap();
    let ControlEvent::Start { ports } = event else {
        panic!("expected a start event");
    };

    assert_eq!(ports.len(), 3);
    assert_eq!(ports[0], PortState::new("gain", 0.8));
    assert_eq!(ports[1], PortState::new("tempo_out", 90.0));
    assert_eq!(ports[2], PortState::new("mix", "50%"));
}

#[test]
fn test_unrecognized_event_type_decodes_to_unknown() {
    let event = ControlEvent::from_json(r#"{"type":"other"}"#).unwrap();
    assert_eq!(event, ControlEvent::Unknown);

    // Extra payload on an unknown type is tolerated too.
    let event = ControlEvent::from_json(r#"{"type":"end","symbol":"tempo_out"}"#).unwrap();
    assert_eq!(event, ControlEvent::Unknown);
}

#[test]
fn test_change_event_without_symbol_is_an_error() {
    let err = ControlEvent::from_json(r#"{"type":"change","value":1}"#).unwrap_err();
    assert!(matches!(
        err,
        EventError::MissingField {
            kind: "change",
            field: "symbol"
        }
    ));
}

#[test]
fn test_change_event_without_value_is_an_error() {
    let err = ControlEvent::from_json(r#"{"type":"change","symbol":"tempo_out"}"#).unwrap_err();
    assert!(matches!(
        err,
        EventError::MissingField {
            kind: "change",
            field: "value"
        }
    ));
}

#[test]
fn test_start_event_without_ports_is_an_error() {
    let err = ControlEvent::from_json(r#"{"type":"start"}"#).unwrap_err();
    assert!(matches!(
        err,
        EventError::MissingField {
            kind: "start",
            field: "ports"
        }
    ));
}

#[test]
fn test_malformed_json_is_an_error() {
    let err = ControlEvent::from_json("{not json").unwrap_err();
    assert!(matches!(err, EventError::Json(_)));
}

#[test]
fn test_numeric_values_render_with_standard_conversion() {
    assert_eq!(PortValue::Number(90.0).to_string(), "90");
    assert_eq!(PortValue::Number(120.5).to_string(), "120.5");
    assert_eq!(PortValue::Number(-3.25).to_string(), "-3.25");
    assert_eq!(PortValue::Number(0.0).to_string(), "0");
}

#[test]
fn test_text_values_render_verbatim() {
    assert_eq!(PortValue::Text("4/4".to_string()).to_string(), "4/4");
    assert_eq!(PortValue::from("").to_string(), "");
}

#[test]
fn test_port_values_decode_untagged() {
    let n: PortValue = serde_json::from_str("90").unwrap();
    assert_eq!(n, PortValue::Number(90.0));

    let s: PortValue = serde_json::from_str(r#""wet""#).unwrap();
    assert_eq!(s, PortValue::Text("wet".to_string()));
}
