//! # Data Model
//!
//! One module per domain the console manages: reservations, rooms, guests,
//! payments and the derived report rows. Every domain record implements
//! [`Record`], which is what lets the generic list pipeline in [`crate::query`]
//! run unchanged over all of them instead of being re-implemented per screen.
//!
//! Records serialize as `camelCase` JSON, matching the payloads of the
//! hotel-management REST API the console talks to.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::FrontdeskError;

pub mod guest;
pub mod payment;
pub mod report;
pub mod reservation;
pub mod room;

pub use guest::{
    EmergencyContact, Guest, GuestPreferences, GuestRoom, GuestStats, GuestStatus, LoyaltyTier,
};
pub use payment::{Payment, PaymentMethod, PaymentStats, PaymentStatus};
pub use report::{OccupancySnapshot, Report, RevenuePoint};
pub use reservation::{
    Reservation, ReservationGuest, ReservationRoom, ReservationStats, ReservationStatus, RoomType,
};
pub use room::{BedConfiguration, BedType, Hotel, Room, RoomStats, RoomStatus, RoomTypeInfo};

/// A domain record the list pipeline can filter, paginate and aggregate.
///
/// The associated items are the per-domain "field accessor configuration":
/// which fields are searchable, which date field a range filter tests, and
/// which categorical filter keys the domain accepts.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Storage key for the collection (`reservations`, `rooms`, ...).
    const COLLECTION: &'static str;

    /// Categorical filter keys this domain accepts (e.g. `room-type`).
    const CATEGORIES: &'static [&'static str];

    /// The domain's closed status enumeration.
    type Status: Copy + Eq + std::fmt::Display + std::str::FromStr<Err = FrontdeskError>;

    fn id(&self) -> &str;

    /// Canonical label of the current status, as stored on the wire.
    fn status_label(&self) -> &'static str;

    /// Set the status and touch `updated_at`.
    fn set_status(&mut self, status: Self::Status, now: DateTime<Utc>);

    /// The fixed set of text fields a search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// The designated date field a range filter tests.
    fn filter_date(&self) -> DateTime<Utc>;

    /// Value of a categorical field, `None` when the key is not one of
    /// [`Record::CATEGORIES`].
    fn category(&self, key: &str) -> Option<String>;
}

/// Defines a closed enumeration whose variants carry the exact labels the
/// backend stores. Parsing is case-insensitive so values coming from UI
/// controls round-trip regardless of casing.
macro_rules! label_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::FrontdeskError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| $crate::error::FrontdeskError::InvalidStatus {
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

pub(crate) use label_enum;
