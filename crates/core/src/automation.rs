//! Automation rules: scheduled-action descriptors.
//!
//! A rule only describes what should run and when. Executing it is the
//! job of an external scheduler, which is out of scope here.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// How often the rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

/// A scheduled-action descriptor.
///
/// `rule_type`, `action`, and `target` are free-form labels consumed by
/// the scheduler (e.g. "fee_reminder" / "send_email" / "all_students");
/// the core only guarantees they are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationRule {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub rule_type: String,
    pub frequency: Frequency,
    pub time: NaiveTime,
    pub action: String,
    pub target: String,
    pub enabled: bool,
    pub created_at: Timestamp,
}

/// All descriptor fields are required on creation.
pub fn validate_rule(name: &str, rule_type: &str, action: &str, target: &str) -> Result<(), CoreError> {
    for (field, value) in [
        ("name", name),
        ("type", rule_type),
        ("action", action),
        ("target", target),
    ] {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Automation {field} must not be empty"
            )));
        }
    }
    Ok(())
}
