use super::*;

// =============================================================
// SendMessageRequest
// =============================================================

#[test]
fn request_serializes_null_point_id() {
    let req = SendMessageRequest { message: "look around".to_owned(), is_major: false, next_point_id: None };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "look around", "is_major": false, "next_point_id": null }));
}

#[test]
fn request_serializes_choice_metadata() {
    let req = SendMessageRequest {
        message: "Open the vault".to_owned(),
        is_major: true,
        next_point_id: Some("vault_opened".to_owned()),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["is_major"], true);
    assert_eq!(json["next_point_id"], "vault_opened");
}

// =============================================================
// SendMessageResponse
// =============================================================

#[test]
fn response_without_options_yields_empty_list() {
    let resp: SendMessageResponse =
        serde_json::from_str(r#"{"ai_message":{"message":"Hi","timestamp":"10:00"}}"#).unwrap();
    assert_eq!(resp.ai_message.message, "Hi");
    assert_eq!(resp.ai_message.timestamp, "10:00");
    assert!(resp.next_action_options.is_empty());
    assert!(resp.user_message.is_none());
}

#[test]
fn response_with_null_options_yields_empty_list() {
    let resp: SendMessageResponse = serde_json::from_str(
        r#"{"ai_message":{"message":"Hi","timestamp":"10:00"},"next_action_options":null}"#,
    )
    .unwrap();
    assert!(resp.next_action_options.is_empty());
}

#[test]
fn response_accepts_user_message_echo() {
    let resp: SendMessageResponse = serde_json::from_str(
        r#"{
            "user_message": {"message":"hello","timestamp":"09:59"},
            "ai_message": {"message":"Hi","timestamp":"10:00"},
            "next_action_options": [{"text":"Wave","is_major":false,"next_point_id":null}]
        }"#,
    )
    .unwrap();
    assert_eq!(resp.user_message.map(|m| m.message).as_deref(), Some("hello"));
    assert_eq!(resp.next_action_options.len(), 1);
}

#[test]
fn response_missing_ai_message_is_rejected() {
    let parsed = serde_json::from_str::<SendMessageResponse>(r#"{"next_action_options":[]}"#);
    assert!(parsed.is_err());
}

// =============================================================
// ActionOption leniency
// =============================================================

#[test]
fn option_defaults_missing_flags() {
    let opt: ActionOption = serde_json::from_str(r#"{"text":"Run"}"#).unwrap();
    assert_eq!(opt, ActionOption { text: "Run".to_owned(), is_major: false, next_point_id: None });
}

#[test]
fn option_treats_null_is_major_as_false() {
    let opt: ActionOption = serde_json::from_str(r#"{"text":"Run","is_major":null}"#).unwrap();
    assert!(!opt.is_major);
}

#[test]
fn option_accepts_numeric_point_id() {
    let opt: ActionOption = serde_json::from_str(r#"{"text":"Go","next_point_id":7}"#).unwrap();
    assert_eq!(opt.next_point_id.as_deref(), Some("7"));
}

#[test]
fn option_treats_empty_point_id_as_none() {
    let opt: ActionOption = serde_json::from_str(r#"{"text":"Go","next_point_id":""}"#).unwrap();
    assert_eq!(opt.next_point_id, None);
}

#[test]
fn option_rejects_object_point_id() {
    let parsed = serde_json::from_str::<ActionOption>(r#"{"text":"Go","next_point_id":{}}"#);
    assert!(parsed.is_err());
}
