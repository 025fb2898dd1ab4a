use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{label_enum, Record};
use crate::query::stats::Summarize;

label_enum!(RoomStatus {
    Available => "Available",
    Occupied => "Occupied",
    Reserved => "Reserved",
    Maintenance => "Maintenance",
    Cleaning => "Cleaning",
    OutOfService => "Out of Service",
});

label_enum!(BedType {
    King => "King",
    Queen => "Queen",
    Double => "Double",
    Single => "Single",
    Twin => "Twin",
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub room_number: String,
    pub room_type: RoomTypeInfo,
    pub hotel: Hotel,
    pub status: RoomStatus,
    pub floor: u32,
    pub price: f64,
    pub capacity: u32,
    pub beds: BedConfiguration,
    pub amenities: Vec<String>,
    pub description: String,
    /// Square meters.
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_cleaned: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_price: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub address: String,
    pub total_rooms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedConfiguration {
    #[serde(rename = "type")]
    pub bed_type: BedType,
    pub quantity: u32,
}

impl Record for Room {
    const COLLECTION: &'static str = "rooms";
    const CATEGORIES: &'static [&'static str] = &["hotel", "room-type", "floor"];
    type Status = RoomStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }

    fn set_status(&mut self, status: RoomStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.room_number, &self.room_type.name]
    }

    fn filter_date(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn category(&self, key: &str) -> Option<String> {
        match key {
            "hotel" => Some(self.hotel.id.clone()),
            "room-type" => Some(self.room_type.name.clone()),
            "floor" => Some(self.floor.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStats {
    pub total_rooms: usize,
    pub available: usize,
    pub occupied: usize,
    pub avg_rate_per_night: f64,
}

impl Summarize for Room {
    type Stats = RoomStats;

    fn summarize(records: &[Self]) -> RoomStats {
        let mut stats = RoomStats {
            total_rooms: records.len(),
            ..Default::default()
        };
        let mut rate_sum = 0.0;
        for r in records {
            match r.status {
                RoomStatus::Available => stats.available += 1,
                RoomStatus::Occupied => stats.occupied += 1,
                _ => {}
            }
            rate_sum += r.price;
        }
        if !records.is_empty() {
            stats.avg_rate_per_night = rate_sum / records.len() as f64;
        }
        stats
    }
}
