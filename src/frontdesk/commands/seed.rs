//! Deterministic sample-data generator.
//!
//! Stands in for the hotel-management backend while it is not wired up:
//! populates every collection with plausible records so the console has
//! something to list. The generator is driven entirely by a seeded RNG and
//! a fixed anchor date, so the same seed always produces the same data.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::model::{
    BedConfiguration, BedType, Guest, GuestPreferences, GuestRoom, GuestStatus, Hotel,
    LoyaltyTier, Payment, PaymentMethod, PaymentStatus, Reservation, ReservationGuest,
    ReservationRoom, ReservationStatus, Room, RoomStatus, RoomType, RoomTypeInfo,
};
use crate::store::DataStore;

const ROOM_COUNT: usize = 248;
const GUEST_COUNT: usize = 97;
const RESERVATION_COUNT: usize = 97;

const GUEST_NAMES: &[&str] = &[
    "Ramon Ridwan",
    "Maria Garcia",
    "John Smith",
    "Ana Martinez",
    "Carlos Rodriguez",
    "Sofia Chen",
    "Michael Brown",
    "Laura Wilson",
    "David Lee",
    "Emma Johnson",
    "James Taylor",
    "Isabella Anderson",
    "Robert Davis",
    "Olivia Martinez",
    "William Moore",
    "Ava Thomas",
];

/// What a seeding run wrote, per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub rooms: usize,
    pub guests: usize,
    pub reservations: usize,
    pub payments: usize,
}

/// Populate every collection from the given seed, replacing whatever was
/// there.
pub fn run<S: DataStore>(store: &mut S, seed: u64) -> Result<SeedSummary> {
    let mut rng = StdRng::seed_from_u64(seed);
    let anchor = anchor_date();

    let hotels = hotels();
    let rooms = gen_rooms(&mut rng, &hotels, anchor);
    let guests = gen_guests(&mut rng, anchor);
    let reservations = gen_reservations(&mut rng, anchor);
    let payments = gen_payments(&mut rng, &reservations);

    store.replace(&rooms)?;
    store.replace(&guests)?;
    store.replace(&reservations)?;
    store.replace(&payments)?;

    Ok(SeedSummary {
        rooms: rooms.len(),
        guests: guests.len(),
        reservations: reservations.len(),
        payments: payments.len(),
    })
}

/// Fixed reference "today" so generated data does not drift between runs.
fn anchor_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).single().unwrap_or_default()
}

fn hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: "hotel-1".to_string(),
            name: "Ponti Marriott New York".to_string(),
            city: "New York".to_string(),
            country: "USA".to_string(),
            address: "123 Manhattan Ave".to_string(),
            total_rooms: 150,
        },
        Hotel {
            id: "hotel-2".to_string(),
            name: "Ponti Marriott Los Angeles".to_string(),
            city: "Los Angeles".to_string(),
            country: "USA".to_string(),
            address: "456 Hollywood Blvd".to_string(),
            total_rooms: 98,
        },
    ]
}

fn room_type_infos() -> Vec<RoomTypeInfo> {
    vec![
        RoomTypeInfo {
            id: "1".to_string(),
            name: "Single Room".to_string(),
            description: "Perfect for solo travelers".to_string(),
            base_price: 180.0,
            features: vec!["WiFi".to_string(), "TV".to_string(), "AC".to_string()],
        },
        RoomTypeInfo {
            id: "2".to_string(),
            name: "Double Room".to_string(),
            description: "Ideal for couples".to_string(),
            base_price: 280.0,
            features: vec![
                "WiFi".to_string(),
                "TV".to_string(),
                "AC".to_string(),
                "Mini Bar".to_string(),
            ],
        },
        RoomTypeInfo {
            id: "3".to_string(),
            name: "Family Suite".to_string(),
            description: "Spacious for families".to_string(),
            base_price: 480.0,
            features: vec![
                "WiFi".to_string(),
                "TV".to_string(),
                "AC".to_string(),
                "Kitchen".to_string(),
                "Living Room".to_string(),
            ],
        },
    ]
}

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn gen_rooms(rng: &mut StdRng, hotels: &[Hotel], anchor: DateTime<Utc>) -> Vec<Room> {
    let types = room_type_infos();

    (1..=ROOM_COUNT)
        .map(|i| {
            let room_type = pick(rng, &types).clone();
            let floor = rng.gen_range(1..=15);
            let room_number = format!("{}{:02}", floor, rng.gen_range(1..=20));
            let hotel = pick(rng, hotels).clone();
            let status = *pick(rng, RoomStatus::ALL);
            let capacity = match room_type.name.as_str() {
                "Single Room" => 1,
                "Double Room" => 2,
                _ => 4,
            };
            let beds = BedConfiguration {
                bed_type: if capacity == 1 {
                    BedType::Single
                } else {
                    BedType::King
                },
                quantity: if capacity == 4 { 2 } else { 1 },
            };

            Room {
                id: format!("room-{i}"),
                room_number,
                amenities: room_type.features.clone(),
                description: room_type.description.clone(),
                price: room_type.base_price,
                room_type,
                hotel,
                status,
                floor,
                capacity,
                beds,
                size: rng.gen_range(20..50),
                view: if rng.gen_bool(0.5) {
                    Some("City View".to_string())
                } else {
                    Some("Ocean View".to_string())
                },
                last_cleaned: Some(anchor),
                maintenance_notes: None,
                created_at: anchor,
                updated_at: anchor,
            }
        })
        .collect()
}

fn gen_guests(rng: &mut StdRng, anchor: DateTime<Utc>) -> Vec<Guest> {
    let room_type_names = [
        "Single Room",
        "Double Room",
        "Suite",
        "Family Room",
        "Deluxe Room",
    ];

    (1..=GUEST_COUNT)
        .map(|i| {
            let name = *pick(rng, GUEST_NAMES);
            let check_in = anchor - Duration::days(rng.gen_range(0..15));
            let check_out = check_in + Duration::days(rng.gen_range(1..=7));
            let floor = rng.gen_range(1..=8);

            Guest {
                id: format!("guest-{i}"),
                guest_id: format!("#GU{i:04}"),
                name: name.to_string(),
                email: format!("{}@gmail.com", name.to_lowercase().replace(' ', ".")),
                phone: format!("+1-234-567-{}", rng.gen_range(1000..10000)),
                status: *pick(rng, GuestStatus::ALL),
                room: GuestRoom {
                    number: format!("{}{:02}", floor, rng.gen_range(1..=20)),
                    room_type: (*pick(rng, &room_type_names)).to_string(),
                    floor: Some(floor),
                },
                check_in,
                check_out,
                nationality: Some("USA".to_string()),
                document_type: Some("Passport".to_string()),
                document_number: Some(format!("P{}", rng.gen_range(100000..1000000))),
                address: Some(format!("{} Main Street", rng.gen_range(1..10000))),
                city: Some("New York".to_string()),
                country: Some("United States".to_string()),
                emergency_contact: None,
                preferences: Some(GuestPreferences {
                    bed_type: Some("King".to_string()),
                    smoking_room: false,
                    floor_preference: Some("High".to_string()),
                    special_requests: if rng.gen_bool(0.3) {
                        Some("Late check-in".to_string())
                    } else {
                        None
                    },
                }),
                loyalty_tier: Some(*pick(rng, LoyaltyTier::ALL)),
                total_stays: rng.gen_range(1..=50),
                total_spent: rng.gen_range(1000..51000) as f64,
                created_at: anchor - Duration::days(rng.gen_range(0..365)),
                updated_at: anchor,
            }
        })
        .collect()
}

fn gen_reservations(rng: &mut StdRng, anchor: DateTime<Utc>) -> Vec<Reservation> {
    (1..=RESERVATION_COUNT)
        .map(|i| {
            let name = *pick(rng, &GUEST_NAMES[..12]);
            let check_in = anchor + Duration::days(rng.gen_range(-15..15));
            let nights = rng.gen_range(1..=7);
            let check_out = check_in + Duration::days(nights);
            let floor = rng.gen_range(1..=8);
            let room_number = format!("{}{:02}", floor, rng.gen_range(1..=20));

            Reservation {
                id: format!("res-{i}"),
                reservation_number: format!("#RES-2024-{:03}", i),
                guest: ReservationGuest {
                    id: format!("guest-{i}"),
                    name: name.to_string(),
                    email: format!("{}@gmail.com", name.to_lowercase().replace(' ', ".")),
                    phone: Some(format!("+1-555-{}", rng.gen_range(1000..10000))),
                    nationality: Some("USA".to_string()),
                    document_type: Some("Passport".to_string()),
                    document_number: Some(format!("P{}", rng.gen_range(100000..1000000))),
                },
                room: ReservationRoom {
                    id: format!("room-{room_number}"),
                    number: room_number,
                    room_type: *pick(rng, RoomType::ALL),
                    floor: Some(floor),
                    features: vec![
                        "WiFi".to_string(),
                        "TV".to_string(),
                        "Air Conditioning".to_string(),
                    ],
                },
                check_in,
                check_out,
                status: *pick(rng, ReservationStatus::ALL),
                total: rng.gen_range(200..1700) as f64,
                nights,
                guests: rng.gen_range(1..=4),
                special_requests: if rng.gen_bool(0.3) {
                    Some("Late check-in requested".to_string())
                } else {
                    None
                },
                created_at: anchor - Duration::days(rng.gen_range(0..30)),
                updated_at: anchor,
            }
        })
        .collect()
}

fn gen_payments(rng: &mut StdRng, reservations: &[Reservation]) -> Vec<Payment> {
    reservations
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            let status = *pick(rng, PaymentStatus::ALL);
            Payment {
                id: format!("pay-{}", idx + 1),
                reservation_id: r.id.clone(),
                amount: r.total,
                transaction_id: format!("TXN-2024-{:06}", rng.gen_range(0..1000000)),
                method: *pick(rng, PaymentMethod::ALL),
                payment_status: status,
                payment_url: None,
                created_at: r.created_at,
                updated_at: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record as _;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeding_fills_every_collection() {
        let mut store = InMemoryStore::new();
        let summary = run(&mut store, 7).unwrap();

        assert_eq!(summary.rooms, ROOM_COUNT);
        assert_eq!(summary.guests, GUEST_COUNT);
        assert_eq!(summary.reservations, RESERVATION_COUNT);
        assert_eq!(summary.payments, RESERVATION_COUNT);

        let rooms: Vec<Room> = store.load().unwrap();
        assert_eq!(rooms.len(), ROOM_COUNT);
    }

    #[test]
    fn the_same_seed_reproduces_the_same_data() {
        let mut a = InMemoryStore::new();
        let mut b = InMemoryStore::new();
        run(&mut a, 42).unwrap();
        run(&mut b, 42).unwrap();

        let left: Vec<Reservation> = a.load().unwrap();
        let right: Vec<Reservation> = b.load().unwrap();
        assert_eq!(
            serde_json::to_string(&left).unwrap(),
            serde_json::to_string(&right).unwrap()
        );
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = InMemoryStore::new();
        let mut b = InMemoryStore::new();
        run(&mut a, 1).unwrap();
        run(&mut b, 2).unwrap();

        let left: Vec<Payment> = a.load().unwrap();
        let right: Vec<Payment> = b.load().unwrap();
        let left_txn: Vec<&str> = left.iter().map(|p| p.transaction_id.as_str()).collect();
        let right_txn: Vec<&str> = right.iter().map(|p| p.transaction_id.as_str()).collect();
        assert_ne!(left_txn, right_txn);
    }

    #[test]
    fn every_payment_references_a_reservation() {
        let mut store = InMemoryStore::new();
        run(&mut store, 3).unwrap();

        let reservations: Vec<Reservation> = store.load().unwrap();
        let payments: Vec<Payment> = store.load().unwrap();
        for p in &payments {
            assert!(reservations.iter().any(|r| r.id() == p.reservation_id));
            let r = reservations
                .iter()
                .find(|r| r.id() == p.reservation_id)
                .unwrap();
            assert_eq!(p.amount, r.total);
        }
    }
}
