use crate::models::job::WeightConfig;

use super::round_one_decimal;

/// Preferred skills are counted a second time at half strength.
const PREFERRED_DISCOUNT: f64 = 0.5;

/// Weighted overall score, rounded to one decimal.
///
/// The combined skill score already blends required (70%) and preferred (30%) coverage,
/// and is applied against both skill weights. Not clamped: weights that do not sum to
/// 1.0 produce an un-normalized score.
pub fn aggregate(
    skill_score: f64,
    experience_score: f64,
    education_score: f64,
    soft_skills_score: f64,
    weights: &WeightConfig,
) -> f64 {
    let overall = skill_score * weights.required_skills_weight
        + skill_score * weights.preferred_skills_weight * PREFERRED_DISCOUNT
        + experience_score * weights.experience_weight
        + education_score * weights.education_weight
        + soft_skills_score * weights.soft_skills_weight;

    round_one_decimal(overall)
}
