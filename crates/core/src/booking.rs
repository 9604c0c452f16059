//! Booking admission rules: date-range validation, interval overlap
//! detection, pricing, and the booking status state machine.
//!
//! This module lives in `core` (zero internal deps) so the API layer and the
//! repository layer's atomic approve path share one implementation of the
//! rules.

use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::types::Date;

/// Minimum whole-day span of a booking.
pub const MIN_BOOKING_DAYS: i64 = 7;

/// Booking status IDs matching `booking_statuses` seed data (1-based
/// SMALLSERIAL). Intentionally duplicated from the `db` crate's
/// `BookingStatus` enum because `core` must have zero internal deps.
pub const STATUS_PENDING: i16 = 1;
pub const STATUS_APPROVED: i16 = 2;
pub const STATUS_REJECTED: i16 = 3;

/// Whole-day span between start and end, not inclusive of the end day.
///
/// A booking from day 0 to day 7 spans 7 billable days.
pub fn booking_days(start: Date, end: Date) -> i64 {
    (end - start).num_days()
}

/// Total cost of a booking: price per day times the whole-day span.
///
/// Decimal arithmetic throughout; no floating point.
pub fn total_cost(price_per_day: Decimal, start: Date, end: Date) -> Decimal {
    price_per_day * Decimal::from(booking_days(start, end))
}

/// Validate a requested booking range against the evaluation date.
///
/// Rules are checked in order and the first violation wins:
/// 1. start must not be before `today`
/// 2. end must be strictly after start
/// 3. the whole-day span must be at least [`MIN_BOOKING_DAYS`]
pub fn validate_date_range(today: Date, start: Date, end: Date) -> Result<(), String> {
    if start < today {
        return Err("Start date must not be in the past".to_string());
    }
    if end <= start {
        return Err("End date must be after start date".to_string());
    }
    if booking_days(start, end) < MIN_BOOKING_DAYS {
        return Err(format!("Minimum booking duration is {MIN_BOOKING_DAYS} days"));
    }
    Ok(())
}

/// Whether two date ranges share at least one day.
///
/// Bounds are inclusive: a booking ending on day X conflicts with one
/// starting on day X.
pub fn ranges_overlap(start_a: Date, end_a: Date, start_b: Date, end_b: Date) -> bool {
    start_a <= end_b && start_b <= end_a
}

/// Whether the requested range overlaps any of the existing ranges.
pub fn overlaps_any(start: Date, end: Date, existing: &[(Date, Date)]) -> bool {
    existing
        .iter()
        .any(|&(s, e)| ranges_overlap(start, end, s, e))
}

/// Validate advertiser contact details: non-blank name, syntactically
/// valid email.
pub fn validate_advertiser(name: &str, email: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Advertiser name is required".to_string());
    }
    if !email.validate_email() {
        return Err(format!("Invalid advertiser email: {email}"));
    }
    Ok(())
}

/// Booking status state machine.
pub mod state_machine {
    use super::{STATUS_APPROVED, STATUS_PENDING, STATUS_REJECTED};

    /// Returns the set of valid target status IDs reachable from
    /// `from_status`.
    ///
    /// Pending is the only state with outgoing transitions; Approved and
    /// Rejected are terminal.
    pub fn valid_transitions(from_status: i16) -> &'static [i16] {
        match from_status {
            // Pending -> Approved, Rejected
            STATUS_PENDING => &[STATUS_APPROVED, STATUS_REJECTED],
            // Terminal states: Approved, Rejected
            STATUS_APPROVED | STATUS_REJECTED => &[],
            // Unknown status: no transitions allowed
            _ => &[],
        }
    }

    /// Check whether a transition from `from` to `to` is valid.
    pub fn can_transition(from: i16, to: i16) -> bool {
        valid_transitions(from).contains(&to)
    }

    /// Validate a decision on a booking, naming the attempted action and
    /// the current status in the error.
    pub fn validate_decision(from: i16, to: i16, action: &str) -> Result<(), String> {
        if can_transition(from, to) {
            Ok(())
        } else {
            Err(format!(
                "Only pending bookings can be {action}. Current status: {}",
                status_name(from)
            ))
        }
    }

    /// Human-readable name for a status ID (for error messages).
    pub fn status_name(id: i16) -> &'static str {
        match id {
            STATUS_PENDING => "PENDING",
            STATUS_APPROVED => "APPROVED",
            STATUS_REJECTED => "REJECTED",
            _ => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn d(year: i32, month: u32, day: u32) -> Date {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // -----------------------------------------------------------------------
    // Date range validation
    // -----------------------------------------------------------------------

    #[test]
    fn valid_range_passes() {
        let today = d(2025, 6, 1);
        assert!(validate_date_range(today, d(2025, 6, 10), d(2025, 6, 20)).is_ok());
    }

    #[test]
    fn start_today_passes() {
        let today = d(2025, 6, 1);
        assert!(validate_date_range(today, today, d(2025, 6, 8)).is_ok());
    }

    #[test]
    fn past_start_rejected() {
        let today = d(2025, 6, 1);
        let err = validate_date_range(today, d(2025, 5, 31), d(2025, 6, 30)).unwrap_err();
        assert!(err.contains("past"));
    }

    #[test]
    fn end_equal_to_start_rejected() {
        let today = d(2025, 6, 1);
        let err = validate_date_range(today, d(2025, 6, 10), d(2025, 6, 10)).unwrap_err();
        assert!(err.contains("after start date"));
    }

    #[test]
    fn end_before_start_rejected() {
        let today = d(2025, 6, 1);
        let err = validate_date_range(today, d(2025, 6, 10), d(2025, 6, 5)).unwrap_err();
        assert!(err.contains("after start date"));
    }

    #[test]
    fn span_below_minimum_rejected() {
        let today = d(2025, 6, 1);
        let err = validate_date_range(today, d(2025, 6, 10), d(2025, 6, 16)).unwrap_err();
        assert!(err.contains("Minimum booking duration"));
    }

    #[test]
    fn exact_minimum_span_passes() {
        let today = d(2025, 6, 1);
        assert!(validate_date_range(today, d(2025, 6, 10), d(2025, 6, 17)).is_ok());
    }

    #[test]
    fn past_start_reported_before_bad_ordering() {
        // Both rules are violated; the past-start rule must win.
        let today = d(2025, 6, 1);
        let err = validate_date_range(today, d(2025, 5, 20), d(2025, 5, 10)).unwrap_err();
        assert!(err.contains("past"));
    }

    #[test]
    fn bad_ordering_reported_before_short_span() {
        let today = d(2025, 6, 1);
        let err = validate_date_range(today, d(2025, 6, 10), d(2025, 6, 9)).unwrap_err();
        assert!(err.contains("after start date"));
    }

    // -----------------------------------------------------------------------
    // Overlap detection (inclusive bounds)
    // -----------------------------------------------------------------------

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        assert!(!ranges_overlap(
            d(2025, 6, 1),
            d(2025, 6, 10),
            d(2025, 6, 15),
            d(2025, 6, 25)
        ));
    }

    #[test]
    fn contained_range_overlaps() {
        assert!(ranges_overlap(
            d(2025, 6, 1),
            d(2025, 6, 30),
            d(2025, 6, 10),
            d(2025, 6, 20)
        ));
    }

    #[test]
    fn partial_overlap_detected() {
        assert!(ranges_overlap(
            d(2025, 6, 1),
            d(2025, 6, 10),
            d(2025, 6, 5),
            d(2025, 6, 15)
        ));
    }

    #[test]
    fn touching_endpoints_overlap() {
        // One booking ends the day another starts; inclusive bounds make
        // this a conflict.
        assert!(ranges_overlap(
            d(2025, 6, 1),
            d(2025, 6, 10),
            d(2025, 6, 10),
            d(2025, 6, 20)
        ));
    }

    #[test]
    fn identical_ranges_overlap() {
        assert!(ranges_overlap(
            d(2025, 6, 1),
            d(2025, 6, 10),
            d(2025, 6, 1),
            d(2025, 6, 10)
        ));
    }

    #[test]
    fn overlap_is_symmetric() {
        let (s1, e1) = (d(2025, 6, 1), d(2025, 6, 10));
        let (s2, e2) = (d(2025, 6, 8), d(2025, 6, 18));
        assert_eq!(
            ranges_overlap(s1, e1, s2, e2),
            ranges_overlap(s2, e2, s1, e1)
        );
    }

    #[test]
    fn overlaps_any_with_no_existing_bookings() {
        assert!(!overlaps_any(d(2025, 6, 1), d(2025, 6, 10), &[]));
    }

    #[test]
    fn overlaps_any_finds_conflict_among_several() {
        let existing = [
            (d(2025, 5, 1), d(2025, 5, 10)),
            (d(2025, 6, 5), d(2025, 6, 15)),
        ];
        assert!(overlaps_any(d(2025, 6, 1), d(2025, 6, 10), &existing));
    }

    #[test]
    fn overlaps_any_clear_of_all() {
        let existing = [
            (d(2025, 5, 1), d(2025, 5, 10)),
            (d(2025, 6, 20), d(2025, 6, 30)),
        ];
        assert!(!overlaps_any(d(2025, 6, 1), d(2025, 6, 10), &existing));
    }

    // -----------------------------------------------------------------------
    // Pricing
    // -----------------------------------------------------------------------

    #[test]
    fn booking_days_excludes_start_day() {
        assert_eq!(booking_days(d(2025, 6, 1), d(2025, 6, 8)), 7);
    }

    #[test]
    fn ten_days_at_one_hundred_costs_one_thousand() {
        let cost = total_cost(dec!(100.00), d(2025, 6, 10), d(2025, 6, 20));
        assert_eq!(cost, dec!(1000.00));
    }

    #[test]
    fn fractional_price_stays_exact() {
        // 0.10 * 3 must be exactly 0.30, not 0.30000000000000004.
        let cost = total_cost(dec!(0.10), d(2025, 6, 1), d(2025, 6, 4));
        assert_eq!(cost, dec!(0.30));
    }

    #[test]
    fn minimum_span_cost() {
        let cost = total_cost(dec!(49.99), d(2025, 6, 1), d(2025, 6, 8));
        assert_eq!(cost, dec!(349.93));
    }

    // -----------------------------------------------------------------------
    // Advertiser validation
    // -----------------------------------------------------------------------

    #[test]
    fn valid_advertiser_passes() {
        assert!(validate_advertiser("Acme Media", "ads@acme.example").is_ok());
    }

    #[test]
    fn blank_name_rejected() {
        let err = validate_advertiser("   ", "ads@acme.example").unwrap_err();
        assert!(err.contains("name is required"));
    }

    #[test]
    fn malformed_email_rejected() {
        let err = validate_advertiser("Acme Media", "not-an-email").unwrap_err();
        assert!(err.contains("Invalid advertiser email"));
    }

    // -----------------------------------------------------------------------
    // State machine
    // -----------------------------------------------------------------------

    #[test]
    fn pending_to_approved() {
        assert!(state_machine::can_transition(STATUS_PENDING, STATUS_APPROVED));
    }

    #[test]
    fn pending_to_rejected() {
        assert!(state_machine::can_transition(STATUS_PENDING, STATUS_REJECTED));
    }

    #[test]
    fn approved_is_terminal() {
        assert!(state_machine::valid_transitions(STATUS_APPROVED).is_empty());
    }

    #[test]
    fn rejected_is_terminal() {
        assert!(state_machine::valid_transitions(STATUS_REJECTED).is_empty());
    }

    #[test]
    fn unknown_status_has_no_transitions() {
        assert!(state_machine::valid_transitions(99).is_empty());
    }

    #[test]
    fn validate_decision_ok_for_pending() {
        assert!(state_machine::validate_decision(STATUS_PENDING, STATUS_APPROVED, "approved").is_ok());
    }

    #[test]
    fn validate_decision_err_names_action_and_status() {
        let err = state_machine::validate_decision(STATUS_APPROVED, STATUS_APPROVED, "approved")
            .unwrap_err();
        assert!(err.contains("approved"));
        assert!(err.contains("APPROVED"));
    }

    #[test]
    fn validate_decision_err_for_rejected_booking() {
        let err = state_machine::validate_decision(STATUS_REJECTED, STATUS_REJECTED, "rejected")
            .unwrap_err();
        assert!(err.contains("REJECTED"));
    }
}
