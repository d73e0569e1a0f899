use serde::{Deserialize, Serialize};

/// Job profile a candidate is screened against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub title: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    /// Accepted for catalog compatibility. No scorer reads it.
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
    pub minimum_experience_years: u32,
    pub minimum_education: String,
}

/// Relative weights of the scoring components.
///
/// Weights are expected to sum to 1.0 so the overall score lands in 0–100.
/// This is not enforced: other totals produce an un-normalized overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub required_skills_weight: f64,
    pub preferred_skills_weight: f64,
    pub experience_weight: f64,
    pub education_weight: f64,
    pub soft_skills_weight: f64,
}

impl WeightConfig {
    pub fn total(&self) -> f64 {
        self.required_skills_weight
            + self.preferred_skills_weight
            + self.experience_weight
            + self.education_weight
            + self.soft_skills_weight
    }

    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() < 1e-6
    }
}

/// Ordinal education hierarchy. Levels run 1 (lowest) to 5 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EducationLevel {
    HighSchool = 1,
    Associate = 2,
    Bachelor = 3,
    Master = 4,
    Doctorate = 5,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::HighSchool,
        EducationLevel::Associate,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Doctorate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School or Certificate",
            EducationLevel::Associate => "Associate Degree",
            EducationLevel::Bachelor => "Bachelor's Degree",
            EducationLevel::Master => "Master's Degree",
            EducationLevel::Doctorate => "PhD",
        }
    }

    /// Exact-label lookup. Anything outside the hierarchy is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    pub fn rank(self) -> u32 {
        self as u32
    }
}
