//! Inventory guard rules for ad spaces.
//!
//! Ad spaces have no forbidden transitions: operators may move a space
//! between Available, Booked, and Maintenance freely. The one rule enforced
//! here is that bookings are admitted only against an Available space.

use rust_decimal::Decimal;

/// Ad-space status IDs matching `ad_space_statuses` seed data (1-based
/// SMALLSERIAL). Intentionally duplicated from the `db` crate's
/// `AdSpaceStatus` enum because `core` must have zero internal deps.
pub const STATUS_AVAILABLE: i16 = 1;
pub const STATUS_BOOKED: i16 = 2;
pub const STATUS_MAINTENANCE: i16 = 3;

/// All valid ad-space status IDs.
pub const VALID_STATUSES: &[i16] = &[STATUS_AVAILABLE, STATUS_BOOKED, STATUS_MAINTENANCE];

/// Whether a status ID is one of the three known states.
pub fn is_valid_status(status_id: i16) -> bool {
    VALID_STATUSES.contains(&status_id)
}

/// Human-readable name for a status ID (for error messages).
pub fn status_name(status_id: i16) -> &'static str {
    match status_id {
        STATUS_AVAILABLE => "AVAILABLE",
        STATUS_BOOKED => "BOOKED",
        STATUS_MAINTENANCE => "MAINTENANCE",
        _ => "UNKNOWN",
    }
}

/// Check that a space can accept new booking requests.
///
/// Only Available spaces are bookable; the error carries the current
/// status so the caller can surface it.
pub fn ensure_bookable(status_id: i16) -> Result<(), String> {
    if status_id == STATUS_AVAILABLE {
        Ok(())
    } else {
        Err(format!(
            "Ad space is not available. Current status: {}",
            status_name(status_id)
        ))
    }
}

/// Validate a price-per-day value.
pub fn validate_price(price_per_day: Decimal) -> Result<(), String> {
    if price_per_day > Decimal::ZERO {
        Ok(())
    } else {
        Err("Price per day must be greater than 0".to_string())
    }
}

/// Validate the required text fields of an ad space.
pub fn validate_space_fields(name: &str, city: &str, address: &str) -> Result<(), String> {
    for (field, value) in [("name", name), ("city", city), ("address", address)] {
        if value.trim().is_empty() {
            return Err(format!("Ad space {field} is required"));
        }
    }
    Ok(())
}
