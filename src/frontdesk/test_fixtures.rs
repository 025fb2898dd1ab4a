//! Shared record builders for tests.
//!
//! Every builder produces a fully-populated record with stable timestamps so
//! assertions never depend on the wall clock. Only the fields a test cares
//! about are taken as parameters; adjust the rest on the returned value.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::model::{
    BedConfiguration, BedType, EmergencyContact, Guest, GuestRoom, GuestStatus, Hotel,
    LoyaltyTier, Payment, PaymentMethod, PaymentStatus, Reservation, ReservationGuest,
    ReservationRoom, ReservationStatus, Room, RoomStatus, RoomType, RoomTypeInfo,
};

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).single().unwrap()
}

fn digits(id: &str) -> u32 {
    id.chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

pub fn reservation_with(id: &str, status: ReservationStatus, total: f64) -> Reservation {
    let anchor = anchor();
    let nights = 2;
    Reservation {
        id: id.to_string(),
        reservation_number: format!("#RES-2024-{:03}", digits(id)),
        guest: ReservationGuest {
            id: format!("guest-{}", digits(id)),
            name: "Ana Martinez".to_string(),
            email: "ana.martinez@example.com".to_string(),
            phone: Some("+34 600 123 456".to_string()),
            nationality: Some("Spain".to_string()),
            document_type: Some("Passport".to_string()),
            document_number: Some("X1234567".to_string()),
        },
        room: ReservationRoom {
            id: format!("room-{}", digits(id)),
            number: format!("{}", 100 + digits(id)),
            room_type: RoomType::Double,
            floor: Some(1),
            features: vec!["WiFi".to_string(), "TV".to_string()],
        },
        check_in: anchor,
        check_out: anchor + Duration::days(nights),
        status,
        total,
        nights,
        guests: 2,
        special_requests: None,
        created_at: anchor - Duration::days(7),
        updated_at: anchor - Duration::days(7),
    }
}

/// Reservation checking in on a given `YYYY-MM-DD` day, for report tests.
pub fn reservation_on(id: &str, check_in: &str, total: f64, nights: i64) -> Reservation {
    let day: NaiveDate = check_in.parse().unwrap();
    let check_in = Utc
        .from_utc_datetime(&day.and_hms_opt(14, 0, 0).unwrap());
    let mut r = reservation_with(id, ReservationStatus::Confirmed, total);
    r.check_in = check_in;
    r.check_out = check_in + Duration::days(nights);
    r.nights = nights;
    r
}

pub fn room_with(id: &str, status: RoomStatus, price: f64) -> Room {
    let anchor = anchor();
    Room {
        id: id.to_string(),
        room_number: format!("{}", 300 + digits(id)),
        room_type: RoomTypeInfo {
            id: "rt-2".to_string(),
            name: "Double Room".to_string(),
            description: "Comfortable double room".to_string(),
            base_price: price,
            features: vec!["WiFi".to_string()],
        },
        hotel: Hotel {
            id: "hotel-1".to_string(),
            name: "Ponti Marriott Centro".to_string(),
            city: "Madrid".to_string(),
            country: "Spain".to_string(),
            address: "Gran Via 1".to_string(),
            total_rooms: 124,
        },
        status,
        floor: 3,
        price,
        capacity: 2,
        beds: BedConfiguration {
            bed_type: BedType::Queen,
            quantity: 1,
        },
        amenities: vec!["WiFi".to_string(), "Minibar".to_string()],
        description: "Double room with city view".to_string(),
        size: 24,
        view: Some("City".to_string()),
        last_cleaned: Some(anchor - Duration::hours(6)),
        maintenance_notes: None,
        created_at: anchor - Duration::days(30),
        updated_at: anchor - Duration::days(1),
    }
}

pub fn guest_with(id: &str, name: &str, status: GuestStatus) -> Guest {
    let anchor = anchor();
    let email = format!(
        "{}@example.com",
        name.to_lowercase().replace(' ', ".")
    );
    Guest {
        id: id.to_string(),
        guest_id: format!("#GU{:04}", digits(id)),
        name: name.to_string(),
        email,
        phone: "+34 600 987 654".to_string(),
        status,
        room: GuestRoom {
            number: format!("{}", 200 + digits(id)),
            room_type: "Double Room".to_string(),
            floor: Some(2),
        },
        check_in: anchor,
        check_out: anchor + Duration::days(3),
        nationality: Some("Spain".to_string()),
        document_type: Some("Passport".to_string()),
        document_number: Some("Y7654321".to_string()),
        address: None,
        city: Some("Madrid".to_string()),
        country: Some("Spain".to_string()),
        emergency_contact: Some(EmergencyContact {
            name: "Luis Ortiz".to_string(),
            phone: "+34 600 000 111".to_string(),
            relationship: "Sibling".to_string(),
        }),
        preferences: None,
        loyalty_tier: Some(LoyaltyTier::Standard),
        total_stays: 3,
        total_spent: 1240.0,
        created_at: anchor - Duration::days(200),
        updated_at: anchor - Duration::days(1),
    }
}

pub fn payment_with(id: &str, status: PaymentStatus, amount: f64) -> Payment {
    let anchor = anchor();
    Payment {
        id: id.to_string(),
        reservation_id: format!("res-{}", digits(id)),
        amount,
        transaction_id: format!("TXN-{id}"),
        method: PaymentMethod::CreditCard,
        payment_status: status,
        payment_url: None,
        created_at: anchor - Duration::days(1),
        updated_at: None,
    }
}

/// Completed payment created at a specific instant, for date-range tests.
pub fn payment_at(id: &str, created_at: &str) -> Payment {
    let mut p = payment_with(id, PaymentStatus::Completed, 100.0);
    p.created_at = created_at
        .parse::<DateTime<Utc>>()
        .unwrap();
    p
}
