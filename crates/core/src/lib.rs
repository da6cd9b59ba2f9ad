//! Domain layer for the hostel management backend.
//!
//! This crate holds the entity model, per-entity validation and status
//! state machines, the pure aggregation functions that feed the role
//! dashboards, and the report builder. It performs no I/O and has no
//! internal dependencies; all data is passed in by the caller.

pub mod allocation;
pub mod attendance;
pub mod automation;
pub mod complaint;
pub mod error;
pub mod fee;
pub mod notice;
pub mod report;
pub mod room;
pub mod stats;
pub mod student;
pub mod types;
pub mod user;
pub mod visitor;
