use hms_core::automation::{validate_rule, AutomationRule};
use hms_core::error::CoreError;
use hms_core::types::{DbId, Timestamp};

use crate::models::automation::NewAutomation;
use crate::store::{self, MemDb};

/// Read and mutation access to automation rules.
///
/// Rules are the only entity with a hard delete; everything else is
/// update-in-place only.
pub struct AutomationRepo;

impl AutomationRepo {
    /// All rules in insertion order.
    pub fn list(db: &MemDb) -> Result<Vec<AutomationRule>, CoreError> {
        Ok(store::read(&db.automations)?.clone())
    }

    /// Create a rule, enabled from the start.
    pub fn create(
        db: &MemDb,
        input: &NewAutomation,
        now: Timestamp,
    ) -> Result<AutomationRule, CoreError> {
        validate_rule(&input.name, &input.rule_type, &input.action, &input.target)?;
        let rule = AutomationRule {
            id: db.next_id(),
            name: input.name.clone(),
            rule_type: input.rule_type.clone(),
            frequency: input.frequency,
            time: input.time,
            action: input.action.clone(),
            target: input.target.clone(),
            enabled: true,
            created_at: now,
        };
        store::write(&db.automations)?.push(rule.clone());
        Ok(rule)
    }

    /// Flip a rule's enabled flag.
    pub fn toggle(db: &MemDb, id: DbId) -> Result<AutomationRule, CoreError> {
        let mut rules = store::write(&db.automations)?;
        let rule = rules
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Automation",
                id,
            })?;
        rule.enabled = !rule.enabled;
        Ok(rule.clone())
    }

    /// Remove a rule by id.
    pub fn delete(db: &MemDb, id: DbId) -> Result<(), CoreError> {
        let mut rules = store::write(&db.automations)?;
        let before = rules.len();
        rules.retain(|r| r.id != id);
        if rules.len() == before {
            return Err(CoreError::NotFound {
                entity: "Automation",
                id,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{NaiveTime, TimeZone, Utc};
    use hms_core::automation::Frequency;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap()
    }

    fn input() -> NewAutomation {
        NewAutomation {
            name: "Fee reminder".to_string(),
            rule_type: "fee_reminder".to_string(),
            frequency: Frequency::Weekly,
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            action: "send_email".to_string(),
            target: "all_students".to_string(),
        }
    }

    #[test]
    fn created_rule_is_enabled() {
        let db = MemDb::new();
        let rule = AutomationRepo::create(&db, &input(), now()).unwrap();
        assert!(rule.enabled);
    }

    #[test]
    fn blank_name_rejected() {
        let db = MemDb::new();
        let mut bad = input();
        bad.name = String::new();
        assert_matches!(
            AutomationRepo::create(&db, &bad, now()),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn toggle_flips_enabled() {
        let db = MemDb::new();
        let rule = AutomationRepo::create(&db, &input(), now()).unwrap();
        assert!(!AutomationRepo::toggle(&db, rule.id).unwrap().enabled);
        assert!(AutomationRepo::toggle(&db, rule.id).unwrap().enabled);
    }

    #[test]
    fn toggle_unknown_rule_is_not_found() {
        let db = MemDb::new();
        assert_matches!(
            AutomationRepo::toggle(&db, 42),
            Err(CoreError::NotFound { entity: "Automation", id: 42 })
        );
    }

    #[test]
    fn delete_removes_rule() {
        let db = MemDb::new();
        let rule = AutomationRepo::create(&db, &input(), now()).unwrap();
        AutomationRepo::delete(&db, rule.id).unwrap();
        assert!(AutomationRepo::list(&db).unwrap().is_empty());
        assert_matches!(
            AutomationRepo::delete(&db, rule.id),
            Err(CoreError::NotFound { .. })
        );
    }
}
