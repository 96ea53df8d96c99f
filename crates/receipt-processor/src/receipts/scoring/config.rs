/// Point values and thresholds used by the rule pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub retailer_character_points: u64,
    pub round_dollar_points: u64,
    pub quarter_multiple_points: u64,
    pub quarter_step_cents: u64,
    pub item_pair_points: u64,
    pub description_length_divisor: usize,
    pub description_price_percent: u32,
    pub odd_day_points: u64,
    pub afternoon_window_points: u64,
    /// Inclusive.
    pub afternoon_window_start_hour: u32,
    /// Exclusive.
    pub afternoon_window_end_hour: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            retailer_character_points: 1,
            round_dollar_points: 50,
            quarter_multiple_points: 25,
            quarter_step_cents: 25,
            item_pair_points: 5,
            description_length_divisor: 3,
            description_price_percent: 20,
            odd_day_points: 6,
            afternoon_window_points: 10,
            afternoon_window_start_hour: 14,
            afternoon_window_end_hour: 16,
        }
    }
}
