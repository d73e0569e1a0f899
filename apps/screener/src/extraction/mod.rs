//! Candidate extraction: turns raw resume text into a `CandidateProfile`.
//!
//! Two backends behind one trait, chosen once at startup from `Config`:
//! - `HeuristicExtractor`: regex and keyword patterns, no network.
//! - `LlmExtractor`: Claude-backed; any failure falls back to the heuristic result.
//!
//! `AppState` and the CLI hold an `Arc<dyn CandidateExtractor>`.

pub mod heuristic;
pub mod prompts;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::candidate::{CandidateProfile, UNKNOWN_EMAIL, UNKNOWN_NAME};
use prompts::EXTRACT_PROMPT_TEMPLATE;

#[async_trait]
pub trait CandidateExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> Result<CandidateProfile, AppError>;

    /// "heuristic" or "llm", logged with each screening.
    fn backend(&self) -> &'static str;
}

pub struct HeuristicExtractor;

#[async_trait]
impl CandidateExtractor for HeuristicExtractor {
    async fn extract(&self, resume_text: &str) -> Result<CandidateProfile, AppError> {
        Ok(heuristic::extract_profile(resume_text))
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

pub struct LlmExtractor(pub LlmClient);

#[async_trait]
impl CandidateExtractor for LlmExtractor {
    async fn extract(&self, resume_text: &str) -> Result<CandidateProfile, AppError> {
        let prompt = EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

        match self.0.call_json::<ExtractedCandidate>(&prompt, JSON_ONLY_SYSTEM).await {
            Ok(extracted) => {
                debug!("LLM extraction succeeded");
                Ok(extracted.into_profile())
            }
            Err(e) => {
                warn!("LLM extraction failed, falling back to heuristic extraction: {e}");
                Ok(heuristic::extract_profile(resume_text))
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Lenient view of the model's JSON. Every field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExtractedCandidate {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    skills: Vec<String>,
    experience_years: Option<Value>,
    education: Vec<String>,
    past_roles: Vec<String>,
    summary: String,
}

impl ExtractedCandidate {
    fn into_profile(self) -> CandidateProfile {
        CandidateProfile {
            name: non_blank(self.name).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            email: non_blank(self.email).unwrap_or_else(|| UNKNOWN_EMAIL.to_string()),
            phone: non_blank(self.phone),
            skills: self.skills,
            experience_years: self.experience_years.as_ref().map(coerce_years).unwrap_or(0),
            education: self.education,
            past_roles: self.past_roles,
            summary: self.summary,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Accepts 7, 7.5, "7" or "7+"; anything else (or negative) is 0.
fn coerce_years(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.trunc() as u64))
            .map(|n| n.min(u64::from(u32::MAX)) as u32)
            .unwrap_or(0),
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_extraction_maps_to_profile() {
        let json = r#"{
            "name": "John Smith",
            "email": "john.smith@email.com",
            "phone": "(555) 123-4567",
            "skills": ["Google Analytics", "SEO"],
            "experience_years": 7,
            "education": ["Master's Degree", "Bachelor's Degree"],
            "past_roles": ["Senior Digital Marketing Manager"],
            "summary": "Marketing leader."
        }"#;
        let extracted: ExtractedCandidate = serde_json::from_str(json).unwrap();
        let profile = extracted.into_profile();

        assert_eq!(profile.name, "John Smith");
        assert_eq!(profile.experience_years, 7);
        assert_eq!(profile.education.len(), 2);
        assert_eq!(profile.phone.as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let extracted: ExtractedCandidate = serde_json::from_str("{}").unwrap();
        let profile = extracted.into_profile();

        assert_eq!(profile.name, "Unknown");
        assert_eq!(profile.email, "unknown@email.com");
        assert!(profile.phone.is_none());
        assert_eq!(profile.experience_years, 0);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_blank_identity_fields_get_defaults() {
        let extracted: ExtractedCandidate =
            serde_json::from_str(r#"{"name": "  ", "email": "", "phone": ""}"#).unwrap();
        let profile = extracted.into_profile();
        assert_eq!(profile.name, "Unknown");
        assert_eq!(profile.email, "unknown@email.com");
        assert!(profile.phone.is_none());
    }

    #[test]
    fn test_coerce_years_variants() {
        assert_eq!(coerce_years(&json!(7)), 7);
        assert_eq!(coerce_years(&json!(7.9)), 7);
        assert_eq!(coerce_years(&json!("12")), 12);
        assert_eq!(coerce_years(&json!("5+")), 5);
        assert_eq!(coerce_years(&json!(-3)), 0);
        assert_eq!(coerce_years(&json!("several")), 0);
        assert_eq!(coerce_years(&json!(null)), 0);
    }

    #[tokio::test]
    async fn test_heuristic_extractor_never_fails() {
        let profile = HeuristicExtractor.extract("").await.unwrap();
        assert_eq!(profile.name, "Unknown Candidate");
        assert_eq!(HeuristicExtractor.backend(), "heuristic");
    }
}
