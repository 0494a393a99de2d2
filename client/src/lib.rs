//! UI-side state layer for the DAO governance agent.
//!
//! DESIGN
//! ======
//! This crate holds the conversation state container and the project
//! context binder. It performs no I/O and depends on no UI framework: the
//! rendering layer owns an [`state::agent::AgentStore`] instance, drives
//! it through its transition methods, and re-renders from the snapshots
//! delivered to its subscription callback. The HTTP call to the agent
//! endpoint is the rendering layer's concern; the payload and response
//! shapes live in the `wire` crate.

pub mod context;
pub mod state;
