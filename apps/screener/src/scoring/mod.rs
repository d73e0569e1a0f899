//! Scoring engine: deterministic, rule-based evaluation of a candidate against a job.
//!
//! Every function here is pure: identical inputs always yield identical output, and
//! candidates can be scored in parallel without coordination.

pub mod aggregate;
pub mod education;
pub mod experience;
pub mod recommendation;
pub mod skills;
pub mod soft_skills;

use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateProfile;
use crate::models::job::{JobProfile, WeightConfig};

pub use recommendation::{recommend, Confidence, Decision, Recommendation};

/// Component scores and skill analysis for one candidate/job pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub overall_score: f64,
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    /// Folded into `overall_score`; not part of the report.
    #[serde(skip)]
    pub soft_skills_score: f64,
    pub matched_required_skills: Vec<String>,
    pub missing_required_skills: Vec<String>,
    pub matched_preferred_skills: Vec<String>,
    pub experience_assessment: String,
    pub education_assessment: String,
}

impl ScoringResult {
    pub fn recommendation(&self) -> Recommendation {
        recommend(self.overall_score, &self.missing_required_skills)
    }
}

pub fn score_candidate(
    candidate: &CandidateProfile,
    job: &JobProfile,
    weights: &WeightConfig,
) -> ScoringResult {
    let skill_match = skills::match_skills(
        &candidate.skills,
        &job.required_skills,
        &job.preferred_skills,
    );
    let experience =
        experience::score_experience(candidate.experience_years, job.minimum_experience_years);
    let education = education::score_education(&candidate.education, &job.minimum_education);
    let soft_skills = soft_skills::estimate_soft_skills(&candidate.summary, &candidate.past_roles);

    let overall_score = aggregate::aggregate(
        skill_match.score,
        experience.score,
        education.score,
        soft_skills,
        weights,
    );

    ScoringResult {
        overall_score,
        skills_score: round_one_decimal(skill_match.score),
        experience_score: round_one_decimal(experience.score),
        education_score: round_one_decimal(education.score),
        soft_skills_score: soft_skills,
        matched_required_skills: skill_match.matched_required,
        missing_required_skills: skill_match.missing_required,
        matched_preferred_skills: skill_match.matched_preferred,
        experience_assessment: experience.assessment,
        education_assessment: education.assessment,
    }
}

pub(crate) fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
