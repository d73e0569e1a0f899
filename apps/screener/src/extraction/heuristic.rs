//! Pattern-based candidate extraction. No network, always succeeds.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::candidate::{CandidateProfile, UNKNOWN_EMAIL};
use crate::models::job::EducationLevel;

const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";
const MAX_PAST_ROLES: usize = 3;
const MAX_ROLE_LEN: usize = 60;

static NAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([A-Z][a-z]+ [A-Z][a-z]+)").expect("static regex"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})").expect("static regex")
});
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("static regex"));
static YEARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+years?").expect("static regex"));

/// Skill vocabulary searched for verbatim (case-insensitive) in the resume.
const SKILL_VOCABULARY: &[&str] = &[
    "digital marketing",
    "analytics",
    "content marketing",
    "seo",
    "email marketing",
    "social media",
    "marketing automation",
    "hubspot",
    "google analytics",
    "data analysis",
    "a/b testing",
    "python",
    "figma",
    "salesforce",
    "crm",
    "excel",
    "canva",
    "copywriting",
    "market research",
    "project management",
    "leadership",
    "communication",
];

const ROLE_KEYWORDS: &[&str] = &[
    "Manager",
    "Specialist",
    "Coordinator",
    "Director",
    "Analyst",
    "Developer",
    "Engineer",
    "Consultant",
    "Executive",
    "Officer",
];

pub fn extract_profile(resume_text: &str) -> CandidateProfile {
    let experience_years = extract_years(resume_text);

    CandidateProfile {
        name: extract_name(resume_text),
        email: EMAIL
            .captures(resume_text)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| UNKNOWN_EMAIL.to_string()),
        phone: PHONE.find(resume_text).map(|m| m.as_str().to_string()),
        skills: extract_skills(resume_text),
        experience_years,
        education: extract_education(resume_text),
        past_roles: extract_past_roles(resume_text),
        summary: synthesize_summary(experience_years),
    }
}

/// Prefers a leading "JOHN SMITH"-style header line, then the first
/// capitalised two-word line anywhere.
fn extract_name(text: &str) -> String {
    let header = text.lines().map(str::trim).find(|l| !l.is_empty());
    if let Some(line) = header {
        let words: Vec<&str> = line.split_whitespace().collect();
        let looks_like_name = (2..=3).contains(&words.len())
            && words
                .iter()
                .all(|w| w.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\''));
        if looks_like_name {
            return words
                .iter()
                .map(|w| title_case(w))
                .collect::<Vec<_>>()
                .join(" ");
        }
    }

    NAME_LINE
        .captures(text)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string())
}

fn title_case(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| lower.contains(*skill))
        .map(|skill| skill.to_string())
        .collect()
}

fn extract_years(text: &str) -> u32 {
    YEARS
        .captures(text)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0)
}

fn extract_education(text: &str) -> Vec<String> {
    let mut education = Vec::new();
    if text.contains("MBA") || text.contains("Master") {
        education.push(EducationLevel::Master.label().to_string());
    }
    if text.contains("Bachelor") || text.contains("B.S.") || text.contains("B.A.") {
        education.push(EducationLevel::Bachelor.label().to_string());
    }
    if text.contains("Associate") {
        education.push(EducationLevel::Associate.label().to_string());
    }
    if education.is_empty() {
        education.push(EducationLevel::HighSchool.label().to_string());
    }
    education
}

/// Roles come from "Title | Company | Dates" lines that mention a role keyword.
fn extract_past_roles(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.contains('|'))
        .filter(|line| ROLE_KEYWORDS.iter().any(|kw| line.contains(kw)))
        .filter_map(|line| line.split('|').next())
        .map(str::trim)
        .filter(|role| !role.is_empty() && role.len() < MAX_ROLE_LEN)
        .take(MAX_PAST_ROLES)
        .map(String::from)
        .collect()
}

fn synthesize_summary(experience_years: u32) -> String {
    if experience_years >= 5 {
        format!(
            "Results-driven professional with {experience_years}+ years of marketing experience \
             and proven success in campaign management and strategy."
        )
    } else {
        "Experienced professional with demonstrated expertise in marketing and business operations."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{STRONG_RESUME, WEAK_RESUME};

    #[test]
    fn test_strong_resume_identity() {
        let profile = extract_profile(STRONG_RESUME);
        assert_eq!(profile.name, "John Smith");
        assert_eq!(profile.email, "john.smith@email.com");
        assert_eq!(profile.phone.as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn test_strong_resume_experience_and_education() {
        let profile = extract_profile(STRONG_RESUME);
        assert_eq!(profile.experience_years, 7);
        assert_eq!(
            profile.education,
            vec!["Master's Degree".to_string(), "Bachelor's Degree".to_string()]
        );
        assert!(profile.summary.contains("7+ years"));
    }

    #[test]
    fn test_strong_resume_skills_and_roles() {
        let profile = extract_profile(STRONG_RESUME);
        assert!(profile.skills.contains(&"google analytics".to_string()));
        assert!(profile.skills.contains(&"email marketing".to_string()));
        assert!(profile.skills.contains(&"leadership".to_string()));
        assert_eq!(
            profile.past_roles,
            vec![
                "Senior Digital Marketing Manager".to_string(),
                "Digital Marketing Specialist".to_string(),
                "Marketing Coordinator".to_string(),
            ]
        );
    }

    #[test]
    fn test_weak_resume() {
        let profile = extract_profile(WEAK_RESUME);
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "jane.doe@email.com");
        assert!(profile.phone.is_none());
        assert_eq!(profile.experience_years, 0);
        assert_eq!(profile.education, vec!["Bachelor's Degree".to_string()]);
        assert!(profile.past_roles.is_empty());
        assert!(profile.skills.contains(&"social media".to_string()));
    }

    #[test]
    fn test_empty_text_falls_back_to_defaults() {
        let profile = extract_profile("");
        assert_eq!(profile.name, "Unknown Candidate");
        assert_eq!(profile.email, "unknown@email.com");
        assert_eq!(profile.education, vec!["High School or Certificate".to_string()]);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_name_falls_back_to_capitalised_line() {
        let text = "Curriculum vitae of the applicant below\nMaria Lopez\nmaria@lopez.dev";
        assert_eq!(extract_name(text), "Maria Lopez");
    }

    #[test]
    fn test_long_role_lines_are_skipped() {
        let text = "An extremely long description of a Manager role that goes on and on forever | Co\n\
                    Data Analyst | Acme | 2020";
        assert_eq!(extract_past_roles(text), vec!["Data Analyst".to_string()]);
    }
}
