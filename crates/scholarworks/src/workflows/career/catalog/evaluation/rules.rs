use super::super::domain::{
    Enterprise, Industry, Opportunity, Recruitment, WorkInformationKind, WorkInformationVisitor,
    WorkLife,
};
use super::{ScholarshipEvaluator, ScoreComponent};

impl ScholarshipEvaluator {
    fn bonus(&mut self, factor: WorkInformationKind, delta: f64, note: String) {
        self.percentage += delta;
        self.components.push(ScoreComponent {
            factor,
            delta,
            note,
        });
    }
}

impl WorkInformationVisitor for ScholarshipEvaluator {
    /// Settles the base amount and the tracked country. Always overwrites,
    /// so with several enterprises the last one processed wins.
    fn visit_enterprise(&mut self, enterprise: &Enterprise) {
        self.base_scholarship = if enterprise.country.value() == self.config.boosted_country {
            self.config.boosted_scholarship
        } else {
            self.config.base_scholarship
        };
        self.tracked_country = Some(enterprise.country.clone());
        self.components.push(ScoreComponent {
            factor: WorkInformationKind::Enterprise,
            delta: 0.0,
            note: format!(
                "base scholarship set to {} by enterprise in {}",
                self.base_scholarship,
                enterprise.country.value()
            ),
        });
    }

    fn visit_opportunity(&mut self, opportunity: &Opportunity) {
        let Some(country) = opportunity.country.as_ref() else {
            return;
        };
        let differs = self
            .tracked_country
            .as_ref()
            .map(|tracked| tracked != country)
            .unwrap_or(false);
        if differs && self.steam_equivalent {
            let delta = self.config.foreign_opportunity_bonus;
            self.bonus(
                WorkInformationKind::Opportunity,
                delta,
                format!("opportunity abroad in {}", country.value()),
            );
        }
    }

    fn visit_work_life(&mut self, work_life: &WorkLife) {
        let (Some(female), Some(male)) = (work_life.female_workers, work_life.male_workers) else {
            return;
        };
        let total = u64::from(female.value()) + u64::from(male.value());
        if total == 0 {
            return;
        }

        let female_ratio = f64::from(female.value()) / total as f64;
        if female_ratio > 0.5 {
            let delta = self.config.female_majority_bonus;
            self.bonus(
                WorkInformationKind::WorkLife,
                delta,
                format!("female-majority workplace ({:.0}%)", female_ratio * 100.0),
            );
        }
        if self.steam_equivalent {
            let delta = self.config.steam_work_life_bonus;
            self.bonus(
                WorkInformationKind::WorkLife,
                delta,
                "workplace demographics reported for a STEAM-equivalent career".to_string(),
            );
        }
    }

    fn visit_industry(&mut self, industry: &Industry) {
        if industry.cs_related {
            let delta = self.config.cs_industry_bonus;
            self.bonus(
                WorkInformationKind::Industry,
                delta,
                format!("{} is computer-science related", industry.name.value()),
            );
        }
    }

    fn visit_recruitment(&mut self, recruitment: &Recruitment) {
        let languages = &recruitment.languages_requested;
        if languages.is_empty() {
            return;
        }

        let prioritized = languages.iter().any(|language| {
            language
                .value()
                .eq_ignore_ascii_case(&self.config.prioritized_language)
        });
        if prioritized {
            let delta = self.config.prioritized_language_bonus;
            let note = format!("{} requested by recruitment", self.config.prioritized_language);
            self.bonus(WorkInformationKind::Recruitment, delta, note);
        }
        if languages.len() > 1 {
            let delta = self.config.multilingual_bonus;
            let note = format!("{} languages requested by recruitment", languages.len());
            self.bonus(WorkInformationKind::Recruitment, delta, note);
        }
    }
}
