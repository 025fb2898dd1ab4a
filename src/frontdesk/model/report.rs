use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the reports dashboard: activity aggregated per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub date: NaiveDate,
    pub total_reservations: usize,
    pub total_revenue: f64,
    pub avg_price_per_night: f64,
}

/// Point of the revenue series chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub total_revenue: f64,
}

/// Global occupancy snapshot shown as a donut.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySnapshot {
    pub occupied_percentage: f64,
    pub available_percentage: f64,
}
