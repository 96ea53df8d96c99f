use std::fmt;

use chrono::{Datelike, Timelike};
use tracing::debug;

use super::super::domain::Receipt;
use super::config::ScoringConfig;
use super::{RuleKind, ScoreComponent};

/// Evaluate a single rule against a receipt, independent of every other rule.
pub fn evaluate(rule: RuleKind, receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    match rule {
        RuleKind::RetailerAlphanumeric => retailer_alphanumeric(receipt, config),
        RuleKind::RoundDollarTotal => round_dollar_total(receipt, config),
        RuleKind::QuarterMultipleTotal => quarter_multiple_total(receipt, config),
        RuleKind::ItemPairs => item_pairs(receipt, config),
        RuleKind::DescriptionLength => description_length(receipt, config),
        RuleKind::OddPurchaseDay => odd_purchase_day(receipt, config),
        RuleKind::AfternoonWindow => afternoon_window(receipt, config),
    }
}

fn awarded(rule: RuleKind, points: u64, notes: String) -> ScoreComponent {
    ScoreComponent {
        rule,
        points,
        notes,
    }
}

fn unparsed(rule: RuleKind, field: &str, error: impl fmt::Display) -> ScoreComponent {
    debug!(rule = rule.label(), field, %error, "field could not be parsed, rule awards no points");
    awarded(rule, 0, format!("{field} could not be parsed ({error})"))
}

fn retailer_alphanumeric(receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    let count = receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as u64;

    awarded(
        RuleKind::RetailerAlphanumeric,
        count.saturating_mul(config.retailer_character_points),
        format!("{count} alphanumeric character(s) in retailer name"),
    )
}

fn round_dollar_total(receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    let rule = RuleKind::RoundDollarTotal;
    match receipt.total_amount() {
        Ok(total) if total.is_whole_dollars() => awarded(
            rule,
            config.round_dollar_points,
            format!("total {total} is a round dollar amount"),
        ),
        Ok(total) => awarded(rule, 0, format!("total {total} has cents")),
        Err(error) => unparsed(rule, "total", error),
    }
}

fn quarter_multiple_total(receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    let rule = RuleKind::QuarterMultipleTotal;
    let step = config.quarter_step_cents;
    match receipt.total_amount() {
        Ok(total) if total.is_multiple_of(step) => awarded(
            rule,
            config.quarter_multiple_points,
            format!("total {total} is a multiple of {step} cents"),
        ),
        Ok(total) => awarded(
            rule,
            0,
            format!("total {total} is not a multiple of {step} cents"),
        ),
        Err(error) => unparsed(rule, "total", error),
    }
}

fn item_pairs(receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    let pairs = (receipt.items.len() / 2) as u64;
    awarded(
        RuleKind::ItemPairs,
        pairs.saturating_mul(config.item_pair_points),
        format!("{pairs} pair(s) across {} item(s)", receipt.items.len()),
    )
}

// An empty trimmed description has length 0 and therefore qualifies.
fn description_length(receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    let rule = RuleKind::DescriptionLength;
    let divisor = config.description_length_divisor;
    let mut points: u64 = 0;
    let mut qualifying = 0usize;
    let mut unpriced = 0usize;

    for (index, item) in receipt.items.iter().enumerate() {
        let length = item.trimmed_description().chars().count();
        if length.checked_rem(divisor) != Some(0) {
            continue;
        }
        qualifying += 1;

        match item.price_amount() {
            Ok(price) => {
                points = points.saturating_add(price.percent_ceil(config.description_price_percent));
            }
            Err(error) => {
                unpriced += 1;
                debug!(rule = rule.label(), item = index, %error, "item price could not be parsed, item awards no points");
            }
        }
    }

    let mut notes = format!(
        "{qualifying} of {} description(s) have a length divisible by {divisor}",
        receipt.items.len()
    );
    if unpriced > 0 {
        notes.push_str(&format!("; {unpriced} price(s) could not be parsed"));
    }

    awarded(rule, points, notes)
}

fn odd_purchase_day(receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    let rule = RuleKind::OddPurchaseDay;
    match receipt.purchase_date() {
        Ok(date) if date.day() % 2 == 1 => awarded(
            rule,
            config.odd_day_points,
            format!("purchased on odd day {}", date.day()),
        ),
        Ok(date) => awarded(rule, 0, format!("purchased on even day {}", date.day())),
        Err(error) => unparsed(rule, "purchaseDate", error),
    }
}

fn afternoon_window(receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    let rule = RuleKind::AfternoonWindow;
    let window = config.afternoon_window_start_hour..config.afternoon_window_end_hour;
    match receipt.purchase_time() {
        Ok(time) if window.contains(&time.hour()) => awarded(
            rule,
            config.afternoon_window_points,
            format!(
                "purchased at {} within {:02}:00-{:02}:00",
                time.format("%H:%M"),
                window.start,
                window.end
            ),
        ),
        Ok(time) => awarded(
            rule,
            0,
            format!("purchased at {} outside the afternoon window", time.format("%H:%M")),
        ),
        Err(error) => unparsed(rule, "purchaseTime", error),
    }
}
