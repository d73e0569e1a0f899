//! Skill overlap between a candidate and a job profile.

use serde::{Deserialize, Serialize};

use super::clamp_score;

const REQUIRED_SHARE: f64 = 70.0;
const PREFERRED_SHARE: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// 0 – 100. Required skills carry 70 points, preferred skills 30.
    pub score: f64,
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_preferred: Vec<String>,
}

/// A job skill is covered when some candidate skill contains it, ignoring case.
/// The containment runs one way only: "Google Analytics Certification" covers
/// "Google Analytics", not the reverse.
pub fn is_covered(job_skill: &str, candidate_skills_lower: &[String]) -> bool {
    let needle = job_skill.to_lowercase();
    candidate_skills_lower
        .iter()
        .any(|candidate| candidate.contains(&needle))
}

pub fn match_skills(
    candidate_skills: &[String],
    required_skills: &[String],
    preferred_skills: &[String],
) -> SkillMatch {
    let candidate_lower: Vec<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();

    let (matched_required, missing_required): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .cloned()
        .partition(|skill| is_covered(skill, &candidate_lower));

    let matched_preferred: Vec<String> = preferred_skills
        .iter()
        .filter(|skill| is_covered(skill, &candidate_lower))
        .cloned()
        .collect();

    let score = match_rate(matched_required.len(), required_skills.len()) * REQUIRED_SHARE
        + match_rate(matched_preferred.len(), preferred_skills.len()) * PREFERRED_SHARE;

    SkillMatch {
        score: clamp_score(score),
        matched_required,
        missing_required,
        matched_preferred,
    }
}

/// An empty job list earns nothing rather than full credit.
fn match_rate(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}
