//! Repository layer over a process-wide in-memory store.
//!
//! There is no persistence by design: every collection lives for the
//! process lifetime and is reloaded from the seed set on restart. The
//! repository structs are the only access path handlers use, so swapping
//! this crate for a durable store would not touch the domain or API
//! layers.

pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use store::MemDb;
