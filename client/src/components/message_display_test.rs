use super::*;

// =============================================================
// Display line
// =============================================================

#[test]
fn display_line_renders_message_after_prefix() {
    assert_eq!(display_line("hello"), "Message from backend: hello");
}

#[test]
fn display_line_with_default_state_is_bare_prefix() {
    let state = MotdState::default();
    assert_eq!(display_line(&state.text), "Message from backend: ");
}

// =============================================================
// Error line
// =============================================================

#[test]
fn fetch_error_line_carries_fixed_prefix() {
    assert_eq!(
        fetch_error_line("request failed: 500"),
        "Error fetching backend: request failed: 500"
    );
}

#[test]
fn fetch_error_line_preserves_reason_text() {
    let line = fetch_error_line("missing field `message`");
    assert!(line.starts_with("Error fetching backend:"));
    assert!(line.ends_with("missing field `message`"));
}
