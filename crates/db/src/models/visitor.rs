use serde::Deserialize;

use hms_core::types::{DbId, Timestamp};
use hms_core::visitor::VisitPurpose;

/// DTO for registering a visitor at the gate.
#[derive(Debug, Deserialize)]
pub struct RegisterVisitor {
    pub student_id: DbId,
    pub visitor_name: String,
    pub visitor_phone: String,
    pub purpose: VisitPurpose,
    /// Defaults to now when omitted.
    pub check_in_time: Option<Timestamp>,
}

/// DTO for checking a visitor out.
#[derive(Debug, Deserialize)]
pub struct CheckOutVisitor {
    /// Defaults to now when omitted.
    pub check_out_time: Option<Timestamp>,
}
