mod config;
pub mod rules;

pub use config::ScoringConfig;

use serde::Serialize;

use super::domain::Receipt;

/// Named rules in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    RetailerAlphanumeric,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonWindow,
}

impl RuleKind {
    pub const ALL: [RuleKind; 7] = [
        RuleKind::RetailerAlphanumeric,
        RuleKind::RoundDollarTotal,
        RuleKind::QuarterMultipleTotal,
        RuleKind::ItemPairs,
        RuleKind::DescriptionLength,
        RuleKind::OddPurchaseDay,
        RuleKind::AfternoonWindow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::RetailerAlphanumeric => "retailer_alphanumeric",
            RuleKind::RoundDollarTotal => "round_dollar_total",
            RuleKind::QuarterMultipleTotal => "quarter_multiple_total",
            RuleKind::ItemPairs => "item_pairs",
            RuleKind::DescriptionLength => "description_length",
            RuleKind::OddPurchaseDay => "odd_purchase_day",
            RuleKind::AfternoonWindow => "afternoon_window",
        }
    }
}

/// Points a single rule awarded, with a human readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub rule: RuleKind,
    pub points: u64,
    pub notes: String,
}

/// Total score plus the contribution of every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub total: u64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreCard {
    pub fn points_for(&self, rule: RuleKind) -> u64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .sum()
    }
}

/// Stateless scorer applying every rule in [`RuleKind::ALL`] to a receipt.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, receipt: &Receipt) -> ScoreCard {
        let components: Vec<ScoreComponent> = RuleKind::ALL
            .iter()
            .map(|rule| rules::evaluate(*rule, receipt, &self.config))
            .collect();
        let total = components
            .iter()
            .fold(0u64, |sum, component| sum.saturating_add(component.points));

        ScoreCard { total, components }
    }
}

/// Score a receipt with the standard rule values.
///
/// Never fails: a rule whose input field cannot be parsed contributes zero.
pub fn score(receipt: &Receipt) -> u64 {
    ScoringEngine::default().score(receipt).total
}
