//! Request handlers, one module per resource.

pub mod allocations;
pub mod attendance;
pub mod automations;
pub mod complaints;
pub mod dashboard;
pub mod fees;
pub mod notices;
pub mod notifications;
pub mod payments;
pub mod reports;
pub mod rooms;
pub mod students;
pub mod users;
pub mod visitors;
