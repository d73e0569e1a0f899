//! Screening report: the JSON shape existing report consumers read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::candidate::CandidateProfile;
use crate::scoring::{Confidence, Decision};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub candidate: CandidateSection,
    pub screening: ScreeningSection,
    pub scores: ScoreSection,
    pub skills_analysis: SkillsAnalysis,
    pub assessments: Assessments,
    pub interview_questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSection {
    pub name: String,
    pub email: String,
    pub extracted_data: CandidateProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningSection {
    pub screening_id: Uuid,
    pub job_title: String,
    pub screening_date: DateTime<Utc>,
    pub overall_score: f64,
    pub recommendation: Decision,
    pub confidence: Confidence,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSection {
    pub overall: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsAnalysis {
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_preferred: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessments {
    pub experience: String,
    pub education: String,
}
