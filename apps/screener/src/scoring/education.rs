use serde::{Deserialize, Serialize};

use super::clamp_score;
use crate::models::job::EducationLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationScore {
    pub score: f64,
    pub assessment: String,
}

const MEETS_SCORE: i64 = 95;
const ONE_BELOW_SCORE: i64 = 70;
const FAR_BELOW_BASE: i64 = 50;
const PENALTY_PER_LEVEL: i64 = 15;

/// Requirement labels outside the hierarchy fall back to a bachelor's level.
pub fn required_level(minimum_education: &str) -> u32 {
    EducationLevel::from_label(minimum_education)
        .unwrap_or(EducationLevel::Bachelor)
        .rank()
}

/// Highest recognised entry. Unrecognised entries and an empty list count as 0.
pub fn candidate_level(education: &[String]) -> u32 {
    education
        .iter()
        .filter_map(|label| EducationLevel::from_label(label))
        .map(EducationLevel::rank)
        .max()
        .unwrap_or(0)
}

pub fn score_education(education: &[String], minimum_education: &str) -> EducationScore {
    let required = i64::from(required_level(minimum_education));
    let candidate = i64::from(candidate_level(education));

    // The assessment quotes the first listed entry, not necessarily the highest.
    let first_entry = education
        .first()
        .map(String::as_str)
        .unwrap_or("Not specified");

    let (score, assessment) = if candidate >= required {
        (
            MEETS_SCORE,
            format!("Meets or exceeds requirement: {first_entry}"),
        )
    } else if candidate == required - 1 {
        (
            ONE_BELOW_SCORE,
            format!("One level below requirement: {first_entry}"),
        )
    } else {
        (
            (FAR_BELOW_BASE - (required - candidate) * PENALTY_PER_LEVEL).max(0),
            format!("Below requirement: {first_entry}"),
        )
    };

    EducationScore {
        score: clamp_score(score as f64),
        assessment,
    }
}
