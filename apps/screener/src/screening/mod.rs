// Screening pipeline: extract → score → recommend → interview questions → report.
// Collaborators are injected as trait objects; scoring itself lives in crate::scoring.

pub mod handlers;
pub mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Backend;
use crate::errors::AppError;
use crate::extraction::{CandidateExtractor, HeuristicExtractor, LlmExtractor};
use crate::llm_client::LlmClient;
use crate::models::candidate::CandidateProfile;
use crate::models::job::{JobProfile, WeightConfig};
use crate::models::report::{
    Assessments, CandidateSection, ScoreSection, ScreeningReport, ScreeningSection,
    SkillsAnalysis,
};
use crate::questions::{
    LlmQuestionGenerator, QuestionContext, QuestionGenerator, TemplateQuestionGenerator,
};
use crate::scoring::{score_candidate, Recommendation, ScoringResult};

#[derive(Clone)]
pub struct Screener {
    extractor: Arc<dyn CandidateExtractor>,
    questions: Arc<dyn QuestionGenerator>,
}

impl Screener {
    pub fn new(
        extractor: Arc<dyn CandidateExtractor>,
        questions: Arc<dyn QuestionGenerator>,
    ) -> Self {
        Self {
            extractor,
            questions,
        }
    }

    pub fn heuristic() -> Self {
        Self::new(Arc::new(HeuristicExtractor), Arc::new(TemplateQuestionGenerator))
    }

    /// Picks both collaborators once, up front. `Backend::Llm` needs an API key.
    pub fn for_backend(backend: Backend, api_key: Option<&str>) -> Result<Self> {
        match backend {
            Backend::Heuristic => Ok(Self::heuristic()),
            Backend::Llm => {
                let key = api_key
                    .filter(|k| !k.trim().is_empty())
                    .context("backend 'llm' requires ANTHROPIC_API_KEY to be set")?;
                let llm = LlmClient::new(key.to_string())
                    .context("failed to build Anthropic HTTP client")?;
                Ok(Self::new(
                    Arc::new(LlmExtractor(llm.clone())),
                    Arc::new(LlmQuestionGenerator(llm)),
                ))
            }
        }
    }

    pub fn backend_label(&self) -> String {
        format!(
            "extractor={} questions={}",
            self.extractor.backend(),
            self.questions.backend()
        )
    }

    pub async fn screen(
        &self,
        resume_text: &str,
        job: &JobProfile,
        weights: &WeightConfig,
    ) -> Result<ScreeningReport, AppError> {
        if resume_text.trim().is_empty() {
            return Err(AppError::Validation("resume text cannot be empty".to_string()));
        }

        let candidate = self.extractor.extract(resume_text).await?;
        self.screen_profile(candidate, job, weights).await
    }

    /// Same as [`Screener::screen`] for a candidate that has already been extracted.
    pub async fn screen_profile(
        &self,
        candidate: CandidateProfile,
        job: &JobProfile,
        weights: &WeightConfig,
    ) -> Result<ScreeningReport, AppError> {
        let screening_id = Uuid::new_v4();

        if !weights.is_normalized() {
            warn!(
                %screening_id,
                total = weights.total(),
                "weights do not sum to 1.0; overall score is un-normalized"
            );
        }

        let scoring = score_candidate(&candidate, job, weights);
        let recommendation = scoring.recommendation();

        let questions = self
            .questions
            .generate(QuestionContext {
                candidate: &candidate,
                job,
                scoring: &scoring,
            })
            .await;

        info!(
            %screening_id,
            job = %job.title,
            overall = scoring.overall_score,
            recommendation = %recommendation.recommendation,
            confidence = %recommendation.confidence,
            "candidate screened"
        );

        Ok(build_report(
            screening_id,
            candidate,
            job,
            scoring,
            recommendation,
            questions,
        ))
    }
}

pub fn build_report(
    screening_id: Uuid,
    candidate: CandidateProfile,
    job: &JobProfile,
    scoring: ScoringResult,
    recommendation: Recommendation,
    interview_questions: Vec<String>,
) -> ScreeningReport {
    ScreeningReport {
        candidate: CandidateSection {
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            extracted_data: candidate,
        },
        screening: ScreeningSection {
            screening_id,
            job_title: job.title.clone(),
            screening_date: Utc::now(),
            overall_score: scoring.overall_score,
            recommendation: recommendation.recommendation,
            confidence: recommendation.confidence,
            reasoning: recommendation.reasoning,
        },
        scores: ScoreSection {
            overall: scoring.overall_score,
            skills: scoring.skills_score,
            experience: scoring.experience_score,
            education: scoring.education_score,
        },
        skills_analysis: SkillsAnalysis {
            matched_required: scoring.matched_required_skills,
            missing_required: scoring.missing_required_skills,
            matched_preferred: scoring.matched_preferred_skills,
        },
        assessments: Assessments {
            experience: scoring.experience_assessment,
            education: scoring.education_assessment,
        },
        interview_questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::demo::{STRONG_RESUME, WEAK_RESUME};
    use crate::scoring::{Confidence, Decision};

    fn dmm() -> (JobProfile, WeightConfig) {
        let catalog = Catalog::builtin();
        (
            catalog.job("digital_marketing_manager").unwrap().clone(),
            *catalog.weights("marketing").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_strong_demo_resume_end_to_end() {
        let (job, weights) = dmm();
        let report = Screener::heuristic()
            .screen(STRONG_RESUME, &job, &weights)
            .await
            .unwrap();

        assert_eq!(report.candidate.name, "John Smith");
        assert_eq!(report.screening.job_title, "Digital Marketing Manager");
        assert_eq!(report.scores.experience, 90.0);
        assert_eq!(report.scores.education, 95.0);
        // heuristic skills are lower-case vocabulary terms, so the full
        // "Digital Marketing Strategy" requirement is not covered
        assert_eq!(
            report.skills_analysis.missing_required,
            vec!["Digital Marketing Strategy".to_string()]
        );
        assert_eq!(report.interview_questions.len(), 5);
        assert_eq!(report.scores.overall, report.screening.overall_score);
    }

    #[tokio::test]
    async fn test_weak_demo_resume_is_passed() {
        let (job, weights) = dmm();
        let report = Screener::heuristic()
            .screen(WEAK_RESUME, &job, &weights)
            .await
            .unwrap();

        assert_eq!(report.screening.recommendation, Decision::Pass);
        assert_eq!(report.screening.confidence, Confidence::High);
        assert!(report.scores.overall < 60.0);
    }

    #[tokio::test]
    async fn test_blank_resume_is_rejected() {
        let (job, weights) = dmm();
        let err = Screener::heuristic()
            .screen("   ", &job, &weights)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_report_json_shape() {
        let (job, weights) = dmm();
        let report = Screener::heuristic()
            .screen(STRONG_RESUME, &job, &weights)
            .await
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();

        for key in [
            "candidate",
            "screening",
            "scores",
            "skills_analysis",
            "assessments",
            "interview_questions",
        ] {
            assert!(json.get(key).is_some(), "missing section {key}");
        }
        assert!(json["candidate"]["extracted_data"]["skills"].is_array());
        assert!(json["screening"]["recommendation"].is_string());
        assert!(json["skills_analysis"]["matched_preferred"].is_array());
        assert!(json["scores"].get("soft_skills").is_none());
    }

    #[tokio::test]
    async fn test_screen_profile_skips_extraction() {
        let (job, weights) = dmm();
        let candidate = CandidateProfile {
            name: "Pat Lee".to_string(),
            skills: [job.required_skills.clone(), job.preferred_skills.clone()].concat(),
            experience_years: 9,
            education: vec!["PhD".to_string()],
            past_roles: vec!["Marketing Director".to_string()],
            ..CandidateProfile::default()
        };
        let report = Screener::heuristic()
            .screen_profile(candidate, &job, &weights)
            .await
            .unwrap();

        assert_eq!(report.candidate.name, "Pat Lee");
        assert!(report.skills_analysis.missing_required.is_empty());
        // 100*0.35 + 100*0.2*0.5 + 100*0.25 + 95*0.1 + 90*0.1
        assert_eq!(report.scores.overall, 88.5);
        assert_eq!(report.screening.recommendation, Decision::Hire);
        assert_eq!(report.screening.confidence, Confidence::Medium);
    }

    #[test]
    fn test_llm_backend_requires_api_key() {
        assert!(Screener::for_backend(Backend::Llm, None).is_err());
        assert!(Screener::for_backend(Backend::Llm, Some("  ")).is_err());
        assert!(Screener::for_backend(Backend::Heuristic, None).is_ok());
    }

    #[test]
    fn test_llm_backend_label() {
        let screener = Screener::for_backend(Backend::Llm, Some("test-key")).unwrap();
        assert_eq!(screener.backend_label(), "extractor=llm questions=llm");
    }
}
