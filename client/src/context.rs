//! Project-to-context binding for the agent.
//!
//! The agent core never sees the full project record fetched from the
//! data source; it only consumes the narrow [`DaoContext`] snapshot. This
//! module owns the mapping, so a change in the upstream project shape
//! stays contained here.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use serde::Deserialize;
use serde_json::Value;
use wire::DaoContext;

use crate::state::agent::AgentStore;

// =============================================================================
// PROJECT RECORD
// =============================================================================

/// The richer DAO project record as returned by the project data source.
/// Key casing mirrors the upstream API verbatim.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DaoProject {
    #[serde(rename = "generalInfo", default)]
    pub general_info: GeneralInfo,
    #[serde(rename = "onChainData", default)]
    pub on_chain_data: OnChainData,
    #[serde(rename = "votingRounds", default)]
    pub voting_rounds: Vec<Value>,
    #[serde(rename = "userBalance", default)]
    pub user_balance: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GeneralInfo {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub token_symbol: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OnChainData {
    #[serde(rename = "totalSupply", default)]
    pub total_supply: Option<String>,
    /// On-chain proposal actions, passed through as opaque records.
    #[serde(default)]
    pub actions: Vec<Value>,
}

// =============================================================================
// BINDING
// =============================================================================

/// Map a project record (plus the viewing wallet, when connected) into the
/// context snapshot the prompt composer consumes. Field-for-field; missing
/// upstream fields stay absent.
#[must_use]
pub fn bind_project_context(project: &DaoProject, user_address: Option<&str>) -> DaoContext {
    DaoContext {
        project_id: project.general_info.project_id.clone(),
        project_name: project.general_info.name.clone(),
        token_symbol: project.general_info.token_symbol.clone(),
        total_supply: project.on_chain_data.total_supply.clone(),
        current_proposals: project.on_chain_data.actions.clone(),
        voting_rounds: project.voting_rounds.clone(),
        user_balance: project.user_balance,
        user_address: user_address.map(str::to_owned),
    }
}

/// Bind the current project into the store, for use on project page entry.
pub fn set_dao_context_from_project(store: &mut AgentStore, project: &DaoProject, user_address: Option<&str>) {
    store.set_context(Some(bind_project_context(project, user_address)));
}

/// Clear the context when leaving a project page.
pub fn clear_dao_context(store: &mut AgentStore) {
    store.set_context(None);
}
