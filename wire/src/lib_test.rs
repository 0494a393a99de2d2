use super::*;
use serde_json::json;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::User).unwrap(), json!("user"));
    assert_eq!(serde_json::to_value(Role::Assistant).unwrap(), json!("assistant"));
    assert_eq!(serde_json::to_value(Role::System).unwrap(), json!("system"));
}

#[test]
fn role_as_str_matches_wire_name() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::System.as_str(), "system");
}

#[test]
fn chat_message_deserializes_from_wire_shape() {
    let message: ChatMessage = serde_json::from_value(json!({ "role": "assistant", "content": "hi" })).unwrap();
    assert_eq!(message.role, Role::Assistant);
    assert_eq!(message.content, "hi");
}

// =============================================================
// DaoContext
// =============================================================

#[test]
fn dao_context_uses_camel_case_keys() {
    let context = DaoContext {
        project_id: Some("42".into()),
        token_symbol: Some("FLOW".into()),
        user_address: Some("0xabc".into()),
        ..DaoContext::default()
    };
    let value = serde_json::to_value(&context).unwrap();
    assert_eq!(value.get("projectId").and_then(|v| v.as_str()), Some("42"));
    assert_eq!(value.get("tokenSymbol").and_then(|v| v.as_str()), Some("FLOW"));
    assert_eq!(value.get("userAddress").and_then(|v| v.as_str()), Some("0xabc"));
}

#[test]
fn dao_context_omits_absent_fields() {
    let value = serde_json::to_value(DaoContext::default()).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn dao_context_tolerates_partial_input() {
    let context: DaoContext = serde_json::from_value(json!({ "projectName": "Toucans" })).unwrap();
    assert_eq!(context.project_name.as_deref(), Some("Toucans"));
    assert!(context.project_id.is_none());
    assert!(context.current_proposals.is_empty());
}

// =============================================================
// Endpoint bodies
// =============================================================

#[test]
fn agent_request_uses_dao_context_key() {
    let request = AgentRequest {
        messages: vec![ChatMessage { role: Role::User, content: "what is quorum?".into() }],
        dao_context: Some(DaoContext { project_name: Some("Toucans".into()), ..DaoContext::default() }),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("daoContext").is_some());
    assert_eq!(value["messages"][0]["role"], json!("user"));
}

#[test]
fn error_reply_omits_missing_details() {
    let value = serde_json::to_value(ErrorReply::new("Failed to process request")).unwrap();
    assert!(value.get("details").is_none());
    assert_eq!(value.get("error").and_then(|v| v.as_str()), Some("Failed to process request"));
}

#[test]
fn error_reply_carries_details_when_present() {
    let reply = ErrorReply::with_details("Failed to process request", Some("rate limited".into()));
    let value = serde_json::to_value(&reply).unwrap();
    assert_eq!(value.get("details").and_then(|v| v.as_str()), Some("rate limited"));
}
