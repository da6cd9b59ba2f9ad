use chrono::NaiveTime;
use serde::Deserialize;

use hms_core::automation::Frequency;

/// DTO for creating an automation rule.
#[derive(Debug, Deserialize)]
pub struct NewAutomation {
    pub name: String,
    #[serde(rename = "type")]
    pub rule_type: String,
    pub frequency: Frequency,
    pub time: NaiveTime,
    pub action: String,
    pub target: String,
}
