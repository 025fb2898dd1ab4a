use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::Result;
use crate::model::{OccupancySnapshot, Report, Reservation, RevenuePoint, Room, RoomStatus};
use crate::query::DateRange;
use crate::store::DataStore;

/// Build the reports dashboard rows: reservation activity grouped by
/// check-in day, optionally limited to an inclusive date range. Rows come
/// out in ascending date order.
pub fn daily<S: DataStore>(store: &S, range: &DateRange) -> Result<Vec<Report>> {
    let reservations = store.load::<Reservation>()?;

    let mut buckets: BTreeMap<NaiveDate, Vec<&Reservation>> = BTreeMap::new();
    for r in &reservations {
        let day = r.check_in.date_naive();
        if range.contains(r.check_in) {
            buckets.entry(day).or_default().push(r);
        }
    }

    let rows = buckets
        .into_iter()
        .map(|(date, group)| {
            let total_revenue: f64 = group.iter().map(|r| r.total).sum();
            let nights: i64 = group.iter().map(|r| r.nights).sum();
            let avg_price_per_night = if nights > 0 {
                total_revenue / nights as f64
            } else {
                0.0
            };
            Report {
                date,
                total_reservations: group.len(),
                total_revenue,
                avg_price_per_night,
            }
        })
        .collect();

    Ok(rows)
}

/// Revenue series for the chart, one point per report row.
pub fn revenue_series(rows: &[Report]) -> Vec<RevenuePoint> {
    rows.iter()
        .map(|row| RevenuePoint {
            date: row.date,
            total_revenue: row.total_revenue,
        })
        .collect()
}

/// Global occupancy snapshot over the room inventory.
pub fn occupancy<S: DataStore>(store: &S) -> Result<OccupancySnapshot> {
    let rooms = store.load::<Room>()?;
    if rooms.is_empty() {
        return Ok(OccupancySnapshot::default());
    }

    let occupied = rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Occupied)
        .count();
    let available = rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Available)
        .count();
    let total = rooms.len() as f64;

    Ok(OccupancySnapshot {
        occupied_percentage: occupied as f64 / total * 100.0,
        available_percentage: available as f64 / total * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::test_fixtures::{reservation_on, room_with};

    #[test]
    fn rows_group_reservations_by_check_in_day() {
        let fixture = StoreFixture::new().with_records(&[
            reservation_on("res-1", "2024-05-01", 300.0, 3),
            reservation_on("res-2", "2024-05-01", 100.0, 1),
            reservation_on("res-3", "2024-05-02", 200.0, 2),
        ]);

        let rows = daily(&fixture.store, &DateRange::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date.to_string(), "2024-05-01");
        assert_eq!(rows[0].total_reservations, 2);
        assert_eq!(rows[0].total_revenue, 400.0);
        assert_eq!(rows[0].avg_price_per_night, 100.0);
        assert_eq!(rows[1].total_reservations, 1);
    }

    #[test]
    fn range_limits_which_days_are_reported() {
        let fixture = StoreFixture::new().with_records(&[
            reservation_on("res-1", "2024-05-01", 300.0, 3),
            reservation_on("res-2", "2024-05-10", 100.0, 1),
        ]);

        let range = DateRange::parse(Some("2024-05-05"), Some("2024-05-31")).unwrap();
        let rows = daily(&fixture.store, &range).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date.to_string(), "2024-05-10");
    }

    #[test]
    fn revenue_series_mirrors_the_rows() {
        let rows = vec![Report {
            date: "2024-05-01".parse().unwrap(),
            total_reservations: 2,
            total_revenue: 400.0,
            avg_price_per_night: 100.0,
        }];
        let series = revenue_series(&rows);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].total_revenue, 400.0);
    }

    #[test]
    fn occupancy_is_a_percentage_of_the_inventory() {
        let fixture = StoreFixture::new().with_records(&[
            room_with("room-1", RoomStatus::Occupied, 180.0),
            room_with("room-2", RoomStatus::Available, 180.0),
            room_with("room-3", RoomStatus::Available, 180.0),
            room_with("room-4", RoomStatus::Cleaning, 180.0),
        ]);

        let snapshot = occupancy(&fixture.store).unwrap();
        assert_eq!(snapshot.occupied_percentage, 25.0);
        assert_eq!(snapshot.available_percentage, 50.0);
    }

    #[test]
    fn empty_inventory_reports_zero_occupancy() {
        let fixture = StoreFixture::new();
        let snapshot = occupancy(&fixture.store).unwrap();
        assert_eq!(snapshot, OccupancySnapshot::default());
    }
}
