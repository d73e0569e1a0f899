use serde::{Deserialize, Serialize};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_EMAIL: &str = "unknown@email.com";

/// Structured candidate record produced by an extractor.
///
/// Only `skills`, `experience_years`, `education`, `past_roles` and `summary` feed scoring.
/// Identity fields are carried through to the report untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: Vec<String>,
    pub past_roles: Vec<String>,
    pub summary: String,
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            email: UNKNOWN_EMAIL.to_string(),
            phone: None,
            skills: vec![],
            experience_years: 0,
            education: vec![],
            past_roles: vec![],
            summary: String::new(),
        }
    }
}
