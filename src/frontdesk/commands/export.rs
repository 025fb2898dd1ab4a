use crate::error::Result;
use crate::model::Payment;
use crate::query::{filter, FilterCriteria};
use crate::store::DataStore;

const HEADER: &str = "id,reservationId,amount,transactionId,method,status,createdAt";

/// Render the filtered payments as CSV text, one row per payment, in
/// stored order.
pub fn payments_csv<S: DataStore>(store: &S, criteria: &FilterCriteria) -> Result<String> {
    filter::validate::<Payment>(criteria)?;
    let payments = store.load::<Payment>()?;
    let filtered = filter::apply(&payments, criteria);

    let mut out = String::from(HEADER);
    out.push('\n');
    for p in &filtered {
        out.push_str(&format!(
            "{},{},{:.2},{},{},{},{}\n",
            csv_field(&p.id),
            csv_field(&p.reservation_id),
            p.amount,
            csv_field(&p.transaction_id),
            csv_field(p.method.as_str()),
            p.payment_status.as_str(),
            p.created_at.to_rfc3339(),
        ));
    }
    Ok(out)
}

/// Quote a field when it contains a delimiter, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentStatus;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::test_fixtures::payment_with;

    #[test]
    fn exports_a_header_and_one_row_per_payment() {
        let fixture = StoreFixture::new().with_records(&[
            payment_with("pay-1", PaymentStatus::Completed, 300.0),
            payment_with("pay-2", PaymentStatus::Failed, 120.5),
        ]);

        let csv = payments_csv(&fixture.store, &FilterCriteria::new()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("pay-1,"));
        assert!(lines[1].contains(",300.00,"));
        assert!(lines[2].contains(",failed,"));
    }

    #[test]
    fn export_respects_filters() {
        let fixture = StoreFixture::new().with_records(&[
            payment_with("pay-1", PaymentStatus::Completed, 300.0),
            payment_with("pay-2", PaymentStatus::Failed, 120.5),
        ]);

        let criteria = FilterCriteria::new().with_status("completed");
        let csv = payments_csv(&fixture.store, &criteria).unwrap();
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
