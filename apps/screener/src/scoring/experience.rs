use serde::{Deserialize, Serialize};

use super::clamp_score;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceScore {
    pub score: f64,
    pub assessment: String,
}

const BASELINE: i64 = 80;
const BONUS_PER_YEAR: i64 = 5;
const MAX_BONUS: i64 = 20;
const PENALTY_PER_YEAR: i64 = 15;

/// Meeting the minimum earns 80, plus 5 per extra year up to +20.
/// Each year short costs 15, floored at 0.
pub fn score_experience(candidate_years: u32, minimum_years: u32) -> ExperienceScore {
    let candidate = i64::from(candidate_years);
    let minimum = i64::from(minimum_years);

    if candidate >= minimum {
        let bonus = ((candidate - minimum) * BONUS_PER_YEAR).min(MAX_BONUS);
        ExperienceScore {
            score: clamp_score((BASELINE + bonus) as f64),
            assessment: format!("Meets requirement with {candidate_years} years of experience"),
        }
    } else {
        let shortfall = minimum - candidate;
        ExperienceScore {
            score: clamp_score((BASELINE - shortfall * PENALTY_PER_YEAR).max(0) as f64),
            assessment: format!(
                "Below target ({candidate_years} years vs {minimum_years} required)"
            ),
        }
    }
}
