use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{label_enum, Record};
use crate::query::stats::Summarize;

label_enum!(ReservationStatus {
    Confirmed => "Confirmed",
    CheckIn => "Check-in",
    CheckOut => "Check-out",
    Cancelled => "Cancelled",
    Pending => "Pending",
    Completed => "Completed",
    NoShow => "No Show",
});

label_enum!(RoomType {
    Single => "Single Room",
    Double => "Double Room",
    Suite => "Suite",
    Family => "Family Room",
    Deluxe => "Deluxe Room",
    Presidential => "Presidential Suite",
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub reservation_number: String,
    pub guest: ReservationGuest,
    pub room: ReservationRoom,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub status: ReservationStatus,
    pub total: f64,
    pub nights: i64,
    pub guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Guest details embedded in a reservation, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationGuest {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRoom {
    pub id: String,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Record for Reservation {
    const COLLECTION: &'static str = "reservations";
    const CATEGORIES: &'static [&'static str] = &["room-type"];
    type Status = ReservationStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }

    fn set_status(&mut self, status: ReservationStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.guest.name,
            &self.guest.email,
            &self.reservation_number,
            &self.room.number,
        ]
    }

    fn filter_date(&self) -> DateTime<Utc> {
        self.check_in
    }

    fn category(&self, key: &str) -> Option<String> {
        match key {
            "room-type" => Some(self.room.room_type.as_str().to_string()),
            _ => None,
        }
    }
}

/// Summary counters for the reservations dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationStats {
    pub total_reservations: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub checked_in: usize,
    pub cancelled: usize,
    /// Sum of reservation totals where the stay completed.
    pub revenue: f64,
}

impl Summarize for Reservation {
    type Stats = ReservationStats;

    fn summarize(records: &[Self]) -> ReservationStats {
        let mut stats = ReservationStats {
            total_reservations: records.len(),
            ..Default::default()
        };
        for r in records {
            match r.status {
                ReservationStatus::Confirmed => stats.confirmed += 1,
                ReservationStatus::Pending => stats.pending += 1,
                ReservationStatus::CheckIn => stats.checked_in += 1,
                ReservationStatus::Cancelled => stats.cancelled += 1,
                ReservationStatus::Completed => stats.revenue += r.total,
                _ => {}
            }
        }
        stats
    }
}
