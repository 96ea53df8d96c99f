use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::money::{Money, MoneyParseError};

const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";
const PURCHASE_TIME_FORMAT: &str = "%H:%M";

/// Opaque identifier handed back to callers after a receipt is scored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Purchase receipt as submitted by the caller.
///
/// Dates, times and amounts are kept as the submitted text; the typed views
/// below parse them on demand so a bad field only affects the rules that read
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<Item>,
}

impl Receipt {
    pub fn total_amount(&self) -> Result<Money, MoneyParseError> {
        self.total.parse()
    }

    pub fn purchase_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(&self.purchase_date, PURCHASE_DATE_FORMAT)
    }

    pub fn purchase_time(&self) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(&self.purchase_time, PURCHASE_TIME_FORMAT)
    }
}

/// Single line item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn price_amount(&self) -> Result<Money, MoneyParseError> {
        self.price.parse()
    }

    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }
}

/// Stored outcome of scoring one receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub id: ReceiptId,
    pub points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn receipt() -> Receipt {
        serde_json::from_value(serde_json::json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "35.35",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" }
            ]
        }))
        .expect("receipt decodes")
    }

    #[test]
    fn decodes_camel_case_fields() {
        let receipt = receipt();
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
    }

    #[test]
    fn typed_views_parse_submitted_text() {
        let receipt = receipt();
        assert_eq!(
            receipt.purchase_date().expect("date parses"),
            NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid date")
        );
        assert_eq!(receipt.purchase_time().expect("time parses").hour(), 13);
        assert_eq!(receipt.total_amount().expect("total parses").cents(), Some(3535));
        assert_eq!(receipt.items[0].price_amount().expect("price parses").cents(), Some(649));
    }

    #[test]
    fn impossible_calendar_dates_fail_to_parse() {
        let mut receipt = receipt();
        receipt.purchase_date = "2022-02-30".to_string();
        assert!(receipt.purchase_date().is_err());
        receipt.purchase_time = "24:00".to_string();
        assert!(receipt.purchase_time().is_err());
    }

    #[test]
    fn generated_ids_are_unique_uuids() {
        let first = ReceiptId::generate();
        let second = ReceiptId::generate();
        assert_ne!(first, second);
        assert!(uuid::Uuid::parse_str(first.as_str()).is_ok());
    }
}
