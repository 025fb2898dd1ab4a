use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{label_enum, Record};
use crate::query::stats::Summarize;

label_enum!(PaymentStatus {
    Completed => "completed",
    Pending => "pending",
    Failed => "failed",
    Refunded => "refunded",
    Cancelled => "cancelled",
});

label_enum!(PaymentMethod {
    CreditCard => "Credit Card",
    DebitCard => "Debit Card",
    Cash => "Cash",
    BankTransfer => "Bank Transfer",
    PayPal => "PayPal",
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub reservation_id: String,
    pub amount: f64,
    pub transaction_id: String,
    pub method: PaymentMethod,
    pub payment_status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Payment {
    const COLLECTION: &'static str = "payments";
    const CATEGORIES: &'static [&'static str] = &["method"];
    type Status = PaymentStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status_label(&self) -> &'static str {
        self.payment_status.as_str()
    }

    fn set_status(&mut self, status: PaymentStatus, now: DateTime<Utc>) {
        self.payment_status = status;
        self.updated_at = Some(now);
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.transaction_id]
    }

    fn filter_date(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn category(&self, key: &str) -> Option<String> {
        match key {
            "method" => Some(self.method.as_str().to_string()),
            _ => None,
        }
    }
}

/// Counters behind the payment dashboard's summary cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    pub total_revenue: f64,
    pub completed: usize,
    pub pending: usize,
    pub failed: usize,
}

impl Summarize for Payment {
    type Stats = PaymentStats;

    fn summarize(records: &[Self]) -> PaymentStats {
        let mut stats = PaymentStats::default();
        for p in records {
            match p.payment_status {
                PaymentStatus::Completed => {
                    stats.completed += 1;
                    stats.total_revenue += p.amount;
                }
                PaymentStatus::Pending => stats.pending += 1,
                PaymentStatus::Failed => stats.failed += 1,
                _ => {}
            }
        }
        stats
    }
}
