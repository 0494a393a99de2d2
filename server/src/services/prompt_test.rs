use super::*;
use serde_json::json;

fn sample_context() -> DaoContext {
    DaoContext {
        project_id: Some("toucans-42".into()),
        project_name: Some("Toucans".into()),
        token_symbol: Some("TCN".into()),
        total_supply: Some("1000000.0".into()),
        current_proposals: vec![json!({ "title": "Fund grants round 3" })],
        voting_rounds: vec![json!({ "round": 1 })],
        user_balance: Some(150.5),
        user_address: Some("0xf00d".into()),
    }
}

// =============================================================
// Without context
// =============================================================

#[test]
fn base_prompt_is_stable() {
    assert_eq!(build_system_prompt(None), build_system_prompt(None));
}

#[test]
fn base_prompt_sets_role_and_principles() {
    let prompt = build_system_prompt(None);
    assert!(prompt.contains("DAO Governance Expert Assistant"));
    assert!(prompt.contains("Never make investment recommendations"));
    assert!(prompt.contains("verify information on-chain"));
    assert!(prompt.contains("delegation"));
}

#[test]
fn base_prompt_has_no_context_block() {
    assert!(!build_system_prompt(None).contains("Current DAO Context:"));
}

// =============================================================
// With context
// =============================================================

#[test]
fn context_prompt_is_deterministic() {
    let context = sample_context();
    assert_eq!(build_system_prompt(Some(&context)), build_system_prompt(Some(&context)));
}

#[test]
fn context_prompt_serializes_every_present_field() {
    let prompt = build_system_prompt(Some(&sample_context()));
    assert!(prompt.contains("Current DAO Context:"));
    assert!(prompt.contains("toucans-42"));
    assert!(prompt.contains("Toucans"));
    assert!(prompt.contains("TCN"));
    assert!(prompt.contains("1000000.0"));
    assert!(prompt.contains("Fund grants round 3"));
    assert!(prompt.contains("150.5"));
    assert!(prompt.contains("0xf00d"));
}

#[test]
fn context_prompt_marks_context_authoritative() {
    let prompt = build_system_prompt(Some(&sample_context()));
    assert!(prompt.contains("Use this context to provide specific, relevant answers"));
}

#[test]
fn absent_context_fields_are_not_rendered() {
    let context = DaoContext { project_name: Some("Toucans".into()), ..DaoContext::default() };
    let prompt = build_system_prompt(Some(&context));
    assert!(prompt.contains("projectName"));
    assert!(!prompt.contains("tokenSymbol"));
    assert!(!prompt.contains("null"));
}
