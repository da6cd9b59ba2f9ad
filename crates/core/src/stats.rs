//! Aggregation layer: the derived numbers every dashboard renders.
//!
//! All functions here are pure and order-independent; they take a snapshot
//! of an entity collection and return a summary struct. Nothing is cached,
//! so a summary is always consistent with the collection it was computed
//! from.

use chrono::NaiveDate;
use serde::Serialize;

use crate::attendance::{AttendanceRecord, AttendanceStatus};
use crate::complaint::{Complaint, ComplaintStatus};
use crate::fee::{Fee, FeeStatus};
use crate::room::{Room, RoomStatus};

/// Room occupancy breakdown.
///
/// `rate_pct` is the occupied share rounded to the nearest integer percent,
/// or `None` when there are no rooms to take a share of (rendered "N/A").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupancySummary {
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
    pub maintenance: usize,
    pub rate_pct: Option<u8>,
}

/// Occupancy counts over the full room collection.
pub fn occupancy(rooms: &[Room]) -> OccupancySummary {
    let mut occupied = 0;
    let mut available = 0;
    let mut maintenance = 0;
    for room in rooms {
        match room.derived_status() {
            RoomStatus::Occupied => occupied += 1,
            RoomStatus::Available => available += 1,
            RoomStatus::Maintenance => maintenance += 1,
        }
    }

    let rate_pct = if rooms.is_empty() {
        None
    } else {
        Some(((occupied as f64 / rooms.len() as f64) * 100.0).round() as u8)
    };

    OccupancySummary {
        total: rooms.len(),
        occupied,
        available,
        maintenance,
        rate_pct,
    }
}

/// Fee amounts summed by effective status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeTotals {
    pub total: i64,
    pub pending: i64,
    pub paid: i64,
    pub overdue: i64,
    pub waived: i64,
}

/// Sum fee amounts grouped by status as of `today`.
///
/// Statuses are taken through [`Fee::effective_status`], so a pending fee
/// past its due date counts toward `overdue` here without any stored
/// status change.
pub fn fee_totals(fees: &[Fee], today: NaiveDate) -> FeeTotals {
    let mut totals = FeeTotals {
        total: 0,
        pending: 0,
        paid: 0,
        overdue: 0,
        waived: 0,
    };
    for fee in fees {
        totals.total += fee.amount;
        match fee.effective_status(today) {
            FeeStatus::Pending => totals.pending += fee.amount,
            FeeStatus::Paid => totals.paid += fee.amount,
            FeeStatus::Overdue => totals.overdue += fee.amount,
            FeeStatus::Waived => totals.waived += fee.amount,
        }
    }
    totals
}

/// Complaint counts by status. `active` is open plus in-progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplaintStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
    pub active: usize,
}

/// Count complaints grouped by status.
pub fn complaint_stats(complaints: &[Complaint]) -> ComplaintStats {
    let mut stats = ComplaintStats {
        total: complaints.len(),
        open: 0,
        in_progress: 0,
        resolved: 0,
        closed: 0,
        active: 0,
    };
    for complaint in complaints {
        match complaint.status {
            ComplaintStatus::Open => stats.open += 1,
            ComplaintStatus::InProgress => stats.in_progress += 1,
            ComplaintStatus::Resolved => stats.resolved += 1,
            ComplaintStatus::Closed => stats.closed += 1,
        }
    }
    stats.active = stats.open + stats.in_progress;
    stats
}

/// Attendance counts within one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
    pub on_leave: usize,
}

/// Count attendance marks falling in the given month, grouped by status.
pub fn attendance_summary(records: &[AttendanceRecord], year: i32, month: u32) -> AttendanceSummary {
    let mut summary = AttendanceSummary {
        present: 0,
        absent: 0,
        on_leave: 0,
    };
    for record in records.iter().filter(|r| r.in_month(year, month)) {
        match record.status {
            AttendanceStatus::Present => summary.present += 1,
            AttendanceStatus::Absent => summary.absent += 1,
            AttendanceStatus::OnLeave => summary.on_leave += 1,
        }
    }
    summary
}
