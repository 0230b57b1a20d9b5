use super::*;

#[tokio::test]
async fn current_returns_fixed_greeting() {
    let Json(motd) = current().await;
    assert_eq!(motd.message, MOTD_MESSAGE);
}

#[tokio::test]
async fn payload_serializes_to_message_object() {
    let Json(motd) = current().await;
    let body = serde_json::to_string(&motd).expect("serialize");
    assert_eq!(body, r#"{"message":"Hello from Axum backend!"}"#);
}
