//! Work-information record model for career programs.
//!
//! A career owns a heterogeneous sequence of records, each one of exactly
//! five kinds. The variant set is closed; read-only operations stay open by
//! implementing [`WorkInformationVisitor`] and dispatching through
//! [`WorkInformation::accept`], which matches on the record's own variant.

use serde::{Deserialize, Serialize};

use super::values::{Country, DegreeTitle, Description, Language, Name, WorkerCount};

/// Identifier wrapper for cataloged records, assigned by the store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkInformationId(pub String);

/// Minimal projection of the owning career used during scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerSnapshot {
    pub code: String,
    pub steam_equivalent: bool,
    pub degree_title: DegreeTitle,
}

/// An employer attached to the career, with its home country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enterprise {
    pub name: Name,
    pub country: Country,
}

/// A job opening; the country may be unknown at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opportunity {
    pub country: Option<Country>,
}

/// Workplace demographics. Either count may be missing when the source did
/// not report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkLife {
    pub female_workers: Option<WorkerCount>,
    pub male_workers: Option<WorkerCount>,
}

/// Industry sector the career feeds into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Industry {
    pub name: Name,
    pub cs_related: bool,
}

/// A recruitment process: its steps, requisites, and requested languages in
/// the order the employer listed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recruitment {
    pub steps: Description,
    pub requisites: Description,
    pub languages_requested: Vec<Language>,
}

/// The closed set of record variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkDetail {
    Enterprise(Enterprise),
    Opportunity(Opportunity),
    WorkLife(WorkLife),
    Industry(Industry),
    Recruitment(Recruitment),
}

/// Discriminant for the five record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkInformationKind {
    Enterprise,
    Opportunity,
    WorkLife,
    Industry,
    Recruitment,
}

impl WorkInformationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Enterprise => "enterprise",
            Self::Opportunity => "opportunity",
            Self::WorkLife => "work_life",
            Self::Industry => "industry",
            Self::Recruitment => "recruitment",
        }
    }
}

/// A validated work-information record. Instances only exist after intake
/// (or the trusted stored-row mapping) has applied every invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkInformation {
    pub id: WorkInformationId,
    pub description: Option<Description>,
    #[serde(flatten)]
    pub detail: WorkDetail,
}

impl WorkInformation {
    pub fn kind(&self) -> WorkInformationKind {
        match self.detail {
            WorkDetail::Enterprise(_) => WorkInformationKind::Enterprise,
            WorkDetail::Opportunity(_) => WorkInformationKind::Opportunity,
            WorkDetail::WorkLife(_) => WorkInformationKind::WorkLife,
            WorkDetail::Industry(_) => WorkInformationKind::Industry,
            WorkDetail::Recruitment(_) => WorkInformationKind::Recruitment,
        }
    }

    /// Double dispatch: hands the record to the visitor method matching the
    /// record's own variant, regardless of the reference the caller held.
    pub fn accept<V: WorkInformationVisitor + ?Sized>(&self, visitor: &mut V) {
        match &self.detail {
            WorkDetail::Enterprise(enterprise) => visitor.visit_enterprise(enterprise),
            WorkDetail::Opportunity(opportunity) => visitor.visit_opportunity(opportunity),
            WorkDetail::WorkLife(work_life) => visitor.visit_work_life(work_life),
            WorkDetail::Industry(industry) => visitor.visit_industry(industry),
            WorkDetail::Recruitment(recruitment) => visitor.visit_recruitment(recruitment),
        }
    }
}

/// Read-only operation over the closed record set. New operations add an
/// implementation here; the five variants never change for them.
pub trait WorkInformationVisitor {
    fn visit_enterprise(&mut self, enterprise: &Enterprise);
    fn visit_opportunity(&mut self, opportunity: &Opportunity);
    fn visit_work_life(&mut self, work_life: &WorkLife);
    fn visit_industry(&mut self, industry: &Industry);
    fn visit_recruitment(&mut self, recruitment: &Recruitment);
}

/// Counts a career's records per kind, plus the languages its recruitment
/// processes request.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogTally {
    pub enterprises: usize,
    pub opportunities: usize,
    pub work_life_reports: usize,
    pub industries: usize,
    pub recruitments: usize,
    pub languages_requested: usize,
}

impl CatalogTally {
    pub fn collect<'a>(records: impl IntoIterator<Item = &'a WorkInformation>) -> Self {
        let mut tally = Self::default();
        for record in records {
            record.accept(&mut tally);
        }
        tally
    }
}

impl WorkInformationVisitor for CatalogTally {
    fn visit_enterprise(&mut self, _enterprise: &Enterprise) {
        self.enterprises += 1;
    }

    fn visit_opportunity(&mut self, _opportunity: &Opportunity) {
        self.opportunities += 1;
    }

    fn visit_work_life(&mut self, _work_life: &WorkLife) {
        self.work_life_reports += 1;
    }

    fn visit_industry(&mut self, _industry: &Industry) {
        self.industries += 1;
    }

    fn visit_recruitment(&mut self, recruitment: &Recruitment) {
        self.recruitments += 1;
        self.languages_requested += recruitment.languages_requested.len();
    }
}

/// Raw submission shape accepted from clients; every field is unvalidated
/// until intake runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkInformationSubmission {
    Enterprise {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        country: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
    Opportunity {
        #[serde(default)]
        country: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
    WorkLife {
        #[serde(default)]
        female_workers: Option<i64>,
        #[serde(default)]
        male_workers: Option<i64>,
        #[serde(default)]
        description: Option<String>,
    },
    Industry {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        cs_related: bool,
        #[serde(default)]
        description: Option<String>,
    },
    Recruitment {
        #[serde(default)]
        steps: Option<String>,
        #[serde(default)]
        requisites: Option<String>,
        #[serde(default)]
        languages_requested: Vec<String>,
        #[serde(default)]
        description: Option<String>,
    },
}
