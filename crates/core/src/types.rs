/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Booking ranges are calendar dates with no time component; a booking
/// from day N to day M covers whole days.
pub type Date = chrono::NaiveDate;
