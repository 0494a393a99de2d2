use super::*;
use serde_json::json;

fn full_project() -> DaoProject {
    serde_json::from_value(json!({
        "generalInfo": {
            "project_id": "toucans-42",
            "name": "Toucans",
            "token_symbol": "TCN"
        },
        "onChainData": {
            "totalSupply": "1000000.0",
            "actions": [{ "title": "Fund grants round 3" }]
        },
        "votingRounds": [{ "round": 1, "quorum": 0.2 }],
        "userBalance": 150.5
    }))
    .unwrap()
}

// =============================================================
// bind_project_context
// =============================================================

#[test]
fn binds_all_fields() {
    let context = bind_project_context(&full_project(), Some("0xf00d"));
    assert_eq!(context.project_id.as_deref(), Some("toucans-42"));
    assert_eq!(context.project_name.as_deref(), Some("Toucans"));
    assert_eq!(context.token_symbol.as_deref(), Some("TCN"));
    assert_eq!(context.total_supply.as_deref(), Some("1000000.0"));
    assert_eq!(context.current_proposals.len(), 1);
    assert_eq!(context.voting_rounds.len(), 1);
    assert_eq!(context.user_balance, Some(150.5));
    assert_eq!(context.user_address.as_deref(), Some("0xf00d"));
}

#[test]
fn missing_upstream_fields_stay_absent() {
    let context = bind_project_context(&DaoProject::default(), None);
    assert!(context.project_id.is_none());
    assert!(context.project_name.is_none());
    assert!(context.token_symbol.is_none());
    assert!(context.total_supply.is_none());
    assert!(context.current_proposals.is_empty());
    assert!(context.voting_rounds.is_empty());
    assert!(context.user_balance.is_none());
    assert!(context.user_address.is_none());
}

#[test]
fn partial_upstream_record_parses() {
    let project: DaoProject = serde_json::from_value(json!({
        "generalInfo": { "name": "FlowGov" }
    }))
    .unwrap();
    let context = bind_project_context(&project, None);
    assert_eq!(context.project_name.as_deref(), Some("FlowGov"));
    assert!(context.total_supply.is_none());
}

// =============================================================
// Store companions
// =============================================================

#[test]
fn set_dao_context_from_project_writes_store() {
    let mut store = AgentStore::new();
    set_dao_context_from_project(&mut store, &full_project(), Some("0xf00d"));
    let context = store.state().dao_context.as_ref().unwrap();
    assert_eq!(context.project_name.as_deref(), Some("Toucans"));
    assert_eq!(context.user_address.as_deref(), Some("0xf00d"));
}

#[test]
fn clear_dao_context_clears_store() {
    let mut store = AgentStore::new();
    set_dao_context_from_project(&mut store, &full_project(), None);
    clear_dao_context(&mut store);
    assert!(store.state().dao_context.is_none());
}
