//! Status and category helper enums mapping to SMALLSERIAL lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding lookup table, and carries the uppercase wire name
//! used in API query parameters and JSON payloads.

/// Lookup ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_lookup_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database lookup ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// The uppercase wire name used in API parameters and payloads.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            /// All wire names, for "allowed values" error messages.
            pub fn names() -> &'static [&'static str] {
                &[$( $wire ),+]
            }

            /// Parse a wire name, case-insensitively.
            pub fn from_name(name: &str) -> Option<Self> {
                $(
                    if name.eq_ignore_ascii_case($wire) {
                        return Some($name::$variant);
                    }
                )+
                None
            }

            /// Look up a variant by database ID.
            pub fn from_id(id: StatusId) -> Option<Self> {
                $(
                    if id == $val {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_lookup_enum! {
    /// Ad-space availability status. Any state may be set from any other;
    /// only bookings carry transition restrictions.
    AdSpaceStatus {
        Available = 1 => "AVAILABLE",
        Booked = 2 => "BOOKED",
        Maintenance = 3 => "MAINTENANCE",
    }
}

define_lookup_enum! {
    /// Ad-space category.
    AdSpaceCategory {
        Billboard = 1 => "BILLBOARD",
        Transit = 2 => "TRANSIT",
        Digital = 3 => "DIGITAL",
    }
}

define_lookup_enum! {
    /// Booking request lifecycle status. Pending is the only initial
    /// state; Approved and Rejected are terminal.
    BookingStatus {
        Pending = 1 => "PENDING",
        Approved = 2 => "APPROVED",
        Rejected = 3 => "REJECTED",
    }
}
