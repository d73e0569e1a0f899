//! Recommendation tiers. Evaluated top to bottom, first match wins:
//!
//! | overall | missing required | recommendation | confidence            |
//! |---------|------------------|----------------|-----------------------|
//! | ≥ 80    | none             | hire           | high if ≥ 90, else medium |
//! | ≥ 70    | ≤ 1              | review         | medium                |
//! | ≥ 60    | any              | review         | low                   |
//! | < 60    | any              | pass           | high                  |

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Hire,
    Review,
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Hire => "hire",
            Decision::Review => "review",
            Decision::Pass => "pass",
        }
    }
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation: Decision,
    pub confidence: Confidence,
    pub reasoning: String,
}

const HIRE_THRESHOLD: f64 = 80.0;
const HIGH_CONFIDENCE_THRESHOLD: f64 = 90.0;
const SOLID_REVIEW_THRESHOLD: f64 = 70.0;
const REVIEW_THRESHOLD: f64 = 60.0;

pub fn recommend(overall_score: f64, missing_required: &[String]) -> Recommendation {
    if overall_score >= HIRE_THRESHOLD && missing_required.is_empty() {
        let confidence = if overall_score >= HIGH_CONFIDENCE_THRESHOLD {
            Confidence::High
        } else {
            Confidence::Medium
        };
        Recommendation {
            recommendation: Decision::Hire,
            confidence,
            reasoning: format!(
                "Strong candidate with {overall_score:.1}% overall score. \
                 Meets all required skills and experience requirements."
            ),
        }
    } else if overall_score >= SOLID_REVIEW_THRESHOLD && missing_required.len() <= 1 {
        let reasoning = match missing_required.first() {
            Some(skill) => format!(
                "Solid candidate ({overall_score:.1}%) but missing {skill}. \
                 Worth reviewing for potential with training."
            ),
            None => format!(
                "Good candidate ({overall_score:.1}%) but slightly below ideal experience level. \
                 Recommend interview to assess potential."
            ),
        };
        Recommendation {
            recommendation: Decision::Review,
            confidence: Confidence::Medium,
            reasoning,
        }
    } else if overall_score >= REVIEW_THRESHOLD {
        Recommendation {
            recommendation: Decision::Review,
            confidence: Confidence::Low,
            reasoning: format!(
                "Moderate candidate ({overall_score:.1}%) with gaps in required skills. \
                 May be trainable but requires further assessment."
            ),
        }
    } else {
        let reasoning = if missing_required.is_empty() {
            format!(
                "Does not meet minimum requirements ({overall_score:.1}%). \
                 Overall score is below the review threshold."
            )
        } else {
            let top: Vec<&str> = missing_required
                .iter()
                .take(2)
                .map(String::as_str)
                .collect();
            format!(
                "Does not meet minimum requirements ({overall_score:.1}%). \
                 Missing multiple critical skills: {}",
                top.join(", ")
            )
        };
        Recommendation {
            recommendation: Decision::Pass,
            confidence: Confidence::High,
            reasoning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_85_with_nothing_missing_is_medium_hire() {
        let rec = recommend(85.0, &[]);
        assert_eq!(rec.recommendation, Decision::Hire);
        assert_eq!(rec.confidence, Confidence::Medium);
        assert!(rec.reasoning.contains("85.0%"));
    }

    #[test]
    fn test_90_with_nothing_missing_is_high_hire() {
        let rec = recommend(90.0, &[]);
        assert_eq!(rec.recommendation, Decision::Hire);
        assert_eq!(rec.confidence, Confidence::High);
    }

    #[test]
    fn test_high_score_with_one_missing_is_review() {
        let rec = recommend(88.0, &missing(&["Email Marketing"]));
        assert_eq!(rec.recommendation, Decision::Review);
        assert_eq!(rec.confidence, Confidence::Medium);
        assert!(rec.reasoning.contains("missing Email Marketing"));
    }

    #[test]
    fn test_review_without_missing_mentions_experience() {
        let rec = recommend(72.5, &[]);
        assert_eq!(rec.recommendation, Decision::Review);
        assert_eq!(rec.confidence, Confidence::Medium);
        assert!(rec.reasoning.starts_with("Good candidate (72.5%)"));
    }

    #[test]
    fn test_two_missing_drops_to_low_confidence_review() {
        let rec = recommend(75.0, &missing(&["SEO", "Copywriting"]));
        assert_eq!(rec.recommendation, Decision::Review);
        assert_eq!(rec.confidence, Confidence::Low);
    }

    #[test]
    fn test_55_is_high_confidence_pass() {
        let rec = recommend(
            55.0,
            &missing(&["Digital Marketing Strategy", "Google Analytics", "Content Marketing"]),
        );
        assert_eq!(rec.recommendation, Decision::Pass);
        assert_eq!(rec.confidence, Confidence::High);
        assert!(rec
            .reasoning
            .ends_with("Digital Marketing Strategy, Google Analytics"));
    }

    #[test]
    fn test_pass_without_missing_skills_has_readable_reasoning() {
        let rec = recommend(40.0, &[]);
        assert_eq!(rec.recommendation, Decision::Pass);
        assert!(rec.reasoning.contains("below the review threshold"));
    }

    #[test]
    fn test_tiers_are_exhaustive_and_exclusive() {
        let mut score = 0.0;
        while score <= 100.0 {
            for missing_count in 0..4 {
                let list: Vec<String> = (0..missing_count).map(|i| format!("skill-{i}")).collect();
                let rec = recommend(score, &list);
                let expected = if score >= 80.0 && missing_count == 0 {
                    Decision::Hire
                } else if score >= 60.0 {
                    Decision::Review
                } else {
                    Decision::Pass
                };
                assert_eq!(rec.recommendation, expected, "score={score} missing={missing_count}");
            }
            score += 0.5;
        }
    }

    #[test]
    fn test_decision_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Decision::Hire).unwrap(), r#""hire""#);
        assert_eq!(serde_json::to_string(&Confidence::Low).unwrap(), r#""low""#);
    }
}
