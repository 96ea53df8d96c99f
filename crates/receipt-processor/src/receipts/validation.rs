use std::fmt;

use regex::Regex;

use super::domain::Receipt;

const RETAILER_PATTERN: &str = r"^[[:word:][:space:]&-]+$";
const DESCRIPTION_PATTERN: &str = r"^[[:word:][:space:]-]+$";
const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";
const TIME_PATTERN: &str = r"^([01][0-9]|2[0-3]):[0-5][0-9]$";
const AMOUNT_PATTERN: &str = r"^[0-9]+\.[0-9]{2}$";

/// One field that failed its syntactic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: invalid value", self.field)
    }
}

/// Every violation found on a receipt, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_violations(.violations))]
pub struct ReceiptValidationError {
    pub violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Syntactic checks applied to decoded receipts before they are scored.
#[derive(Debug, Clone)]
pub struct ReceiptValidator {
    retailer: Regex,
    description: Regex,
    date: Regex,
    time: Regex,
    amount: Regex,
}

impl ReceiptValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            retailer: Regex::new(RETAILER_PATTERN)?,
            description: Regex::new(DESCRIPTION_PATTERN)?,
            date: Regex::new(DATE_PATTERN)?,
            time: Regex::new(TIME_PATTERN)?,
            amount: Regex::new(AMOUNT_PATTERN)?,
        })
    }

    pub fn validate(&self, receipt: &Receipt) -> Result<(), ReceiptValidationError> {
        let mut violations = Vec::new();
        let mut check = |pattern: &Regex, value: &str, field: String| {
            if !pattern.is_match(value) {
                violations.push(FieldViolation { field });
            }
        };

        check(&self.retailer, &receipt.retailer, "retailer".to_string());
        check(&self.date, &receipt.purchase_date, "purchaseDate".to_string());
        check(&self.time, &receipt.purchase_time, "purchaseTime".to_string());
        check(&self.amount, &receipt.total, "total".to_string());

        for (index, item) in receipt.items.iter().enumerate() {
            check(
                &self.description,
                &item.short_description,
                format!("items[{index}].shortDescription"),
            );
            check(&self.amount, &item.price, format!("items[{index}].price"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ReceiptValidationError { violations })
        }
    }
}
