//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod ad_space_repo;
pub mod booking_repo;

pub use ad_space_repo::AdSpaceRepo;
pub use booking_repo::{ApproveError, BookingRepo};
