use serde::{Deserialize, Serialize};

/// Seeds and bonus amounts for the scholarship fold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub steam_seed_percentage: f64,
    pub standard_seed_percentage: f64,
    pub base_scholarship: f64,
    pub boosted_scholarship: f64,
    pub boosted_country: String,
    pub female_majority_bonus: f64,
    pub steam_work_life_bonus: f64,
    pub foreign_opportunity_bonus: f64,
    pub cs_industry_bonus: f64,
    pub prioritized_language: String,
    pub prioritized_language_bonus: f64,
    pub multilingual_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            steam_seed_percentage: 0.50,
            standard_seed_percentage: 0.20,
            base_scholarship: 2000.0,
            boosted_scholarship: 2500.0,
            boosted_country: "Costa Rica".to_string(),
            female_majority_bonus: 0.10,
            steam_work_life_bonus: 0.08,
            foreign_opportunity_bonus: 0.10,
            cs_industry_bonus: 0.05,
            prioritized_language: "English".to_string(),
            prioritized_language_bonus: 0.10,
            multilingual_bonus: 0.05,
        }
    }
}
