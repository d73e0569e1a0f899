const BASE_SCORE: f64 = 60.0;
const SUMMARY_SIGNAL_SCORE: f64 = 80.0;
const ROLE_SIGNAL_SCORE: f64 = 90.0;

const SUMMARY_KEYWORDS: &[&str] = &[
    "leadership",
    "communication",
    "collaboration",
    "management",
    "team",
];

const LEADERSHIP_ROLE_KEYWORDS: &[&str] = &["manager", "lead", "director"];

/// Keyword-presence estimate of interpersonal skills.
///
/// A leadership title overrides the summary signal rather than adding to it.
pub fn estimate_soft_skills(summary: &str, past_roles: &[String]) -> f64 {
    let summary_lower = summary.to_lowercase();

    let has_leadership_role = past_roles.iter().any(|role| {
        let role_lower = role.to_lowercase();
        LEADERSHIP_ROLE_KEYWORDS
            .iter()
            .any(|kw| role_lower.contains(kw))
    });

    if has_leadership_role {
        ROLE_SIGNAL_SCORE
    } else if SUMMARY_KEYWORDS.iter().any(|kw| summary_lower.contains(kw)) {
        SUMMARY_SIGNAL_SCORE
    } else {
        BASE_SCORE
    }
}
