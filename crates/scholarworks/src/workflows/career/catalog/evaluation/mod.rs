//! Scholarship scoring for one career's record sequence.
//!
//! The evaluator is a stateful fold: one instance scores exactly one career
//! and must not be reused. The fold is order-sensitive, since the
//! opportunity bonus compares against the country settled by an enterprise
//! record. The [`ScholarshipEvaluator::evaluate`] entry folds enterprise
//! records first, making the ordering impossible to get wrong from the
//! outside.

mod config;
mod rules;

pub use config::ScoringConfig;

use serde::Serialize;

use super::domain::{WorkInformation, WorkInformationKind};
use super::values::Country;

/// Discrete contribution to an award, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: WorkInformationKind,
    pub delta: f64,
    pub note: String,
}

/// Final award for a career: the settled base amount, the accumulated
/// percentage, and the audit trail behind them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScholarshipAward {
    pub percentage: f64,
    pub base_scholarship: f64,
    pub total_award: f64,
    pub components: Vec<ScoreComponent>,
}

/// Stateful accumulator for one career's scholarship evaluation.
pub struct ScholarshipEvaluator {
    pub(crate) config: ScoringConfig,
    pub(crate) steam_equivalent: bool,
    pub(crate) percentage: f64,
    pub(crate) base_scholarship: f64,
    pub(crate) tracked_country: Option<Country>,
    pub(crate) components: Vec<ScoreComponent>,
}

impl ScholarshipEvaluator {
    pub fn new(config: ScoringConfig, steam_equivalent: bool) -> Self {
        let percentage = if steam_equivalent {
            config.steam_seed_percentage
        } else {
            config.standard_seed_percentage
        };
        let base_scholarship = config.base_scholarship;

        Self {
            config,
            steam_equivalent,
            percentage,
            base_scholarship,
            tracked_country: None,
            components: Vec::new(),
        }
    }

    /// Scores a full record sequence and finalizes in one call. Enterprise
    /// records fold first (in sequence order, last one winning), then every
    /// other record in sequence order, so the tracked country is settled
    /// before any opportunity is compared against it.
    pub fn evaluate(
        config: ScoringConfig,
        steam_equivalent: bool,
        records: &[WorkInformation],
    ) -> ScholarshipAward {
        let mut evaluator = Self::new(config, steam_equivalent);
        for record in records
            .iter()
            .filter(|record| record.kind() == WorkInformationKind::Enterprise)
        {
            record.accept(&mut evaluator);
        }
        for record in records
            .iter()
            .filter(|record| record.kind() != WorkInformationKind::Enterprise)
        {
            record.accept(&mut evaluator);
        }
        evaluator.finalize()
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn base_scholarship(&self) -> f64 {
        self.base_scholarship
    }

    pub fn tracked_country(&self) -> Option<&Country> {
        self.tracked_country.as_ref()
    }

    /// Computes the award once, after the fold. Consumes the evaluator so a
    /// finalized instance cannot keep accumulating.
    pub fn finalize(self) -> ScholarshipAward {
        let total_award = self.base_scholarship * (1.0 + self.percentage);
        ScholarshipAward {
            percentage: self.percentage,
            base_scholarship: self.base_scholarship,
            total_award,
            components: self.components,
        }
    }
}
