use super::*;

#[test]
fn decodes_payload_with_message_field() {
    let motd: Motd =
        serde_json::from_str(r#"{"message": "Hello from Axum backend!"}"#).expect("decode");
    assert_eq!(motd.message, "Hello from Axum backend!");
}

#[test]
fn decode_accepts_empty_message_text() {
    let motd: Motd = serde_json::from_str(r#"{"message": ""}"#).expect("decode");
    assert_eq!(motd.message, "");
}

#[test]
fn decode_ignores_unknown_fields() {
    let motd: Motd = serde_json::from_str(r#"{"message": "hi", "version": 2}"#).expect("decode");
    assert_eq!(motd.message, "hi");
}

#[test]
fn decode_rejects_missing_message_field() {
    let err = serde_json::from_str::<Motd>("{}").expect_err("payload should fail");
    assert!(err.to_string().contains("message"));
}

#[test]
fn decode_rejects_non_json_body() {
    assert!(serde_json::from_str::<Motd>("<html>not json</html>").is_err());
}

#[test]
fn decode_rejects_non_string_message() {
    assert!(serde_json::from_str::<Motd>(r#"{"message": 42}"#).is_err());
}

#[test]
fn serializes_to_single_field_object() {
    let motd = Motd {
        message: "hi".to_owned(),
    };
    assert_eq!(
        serde_json::to_string(&motd).expect("serialize"),
        r#"{"message":"hi"}"#
    );
}

#[test]
fn payload_round_trips_through_json() {
    let motd = Motd {
        message: "round trip".to_owned(),
    };
    let json = serde_json::to_string(&motd).expect("serialize");
    assert_eq!(serde_json::from_str::<Motd>(&json).expect("decode"), motd);
}
