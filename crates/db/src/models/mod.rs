//! Request DTOs accepted by the repository mutation operations.

pub mod allocation;
pub mod attendance;
pub mod automation;
pub mod complaint;
pub mod notice;
pub mod visitor;
