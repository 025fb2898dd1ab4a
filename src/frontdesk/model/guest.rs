use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{label_enum, Record};
use crate::query::stats::Summarize;

label_enum!(GuestStatus {
    VipActive => "VIP Active",
    Active => "Active",
    New => "New",
    CheckedOut => "Checked Out",
    Cancelled => "Cancelled",
    Blacklisted => "Blacklisted",
});

label_enum!(LoyaltyTier {
    Platinum => "Platinum",
    Gold => "Gold",
    Silver => "Silver",
    Bronze => "Bronze",
    Standard => "Standard",
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    /// Display code shown in the console, e.g. `#GU0001`.
    pub guest_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: GuestStatus,
    pub room: GuestRoom,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<GuestPreferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loyalty_tier: Option<LoyaltyTier>,
    #[serde(default)]
    pub total_stays: u32,
    #[serde(default)]
    pub total_spent: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRoom {
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bed_type: Option<String>,
    #[serde(default)]
    pub smoking_room: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl Record for Guest {
    const COLLECTION: &'static str = "guests";
    const CATEGORIES: &'static [&'static str] = &["room-type", "loyalty"];
    type Status = GuestStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }

    fn set_status(&mut self, status: GuestStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.guest_id, &self.phone]
    }

    fn filter_date(&self) -> DateTime<Utc> {
        self.check_in
    }

    fn category(&self, key: &str) -> Option<String> {
        match key {
            "room-type" => Some(self.room.room_type.clone()),
            "loyalty" => Some(
                self.loyalty_tier
                    .map(|t| t.as_str().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestStats {
    pub total_guests: usize,
    pub active_guests: usize,
    pub vip_guests: usize,
    pub new_guests: usize,
}

impl Summarize for Guest {
    type Stats = GuestStats;

    fn summarize(records: &[Self]) -> GuestStats {
        let mut stats = GuestStats {
            total_guests: records.len(),
            ..Default::default()
        };
        for g in records {
            match g.status {
                GuestStatus::Active => stats.active_guests += 1,
                GuestStatus::VipActive => {
                    stats.active_guests += 1;
                    stats.vip_guests += 1;
                }
                GuestStatus::New => stats.new_guests += 1,
                _ => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::guest_with;

    #[test]
    fn vip_guests_count_as_active() {
        let records = vec![
            guest_with("guest-1", "Ana Martinez", GuestStatus::VipActive),
            guest_with("guest-2", "Carlos Rodriguez", GuestStatus::Active),
            guest_with("guest-3", "John Smith", GuestStatus::New),
            guest_with("guest-4", "Maria Garcia", GuestStatus::CheckedOut),
        ];

        let stats = Guest::summarize(&records);
        assert_eq!(stats.total_guests, 4);
        assert_eq!(stats.active_guests, 2);
        assert_eq!(stats.vip_guests, 1);
        assert_eq!(stats.new_guests, 1);
    }

    #[test]
    fn loyalty_category_is_empty_when_unset() {
        let mut g = guest_with("guest-1", "Ana Martinez", GuestStatus::Active);
        g.loyalty_tier = None;
        assert_eq!(g.category("loyalty").as_deref(), Some(""));
    }
}
