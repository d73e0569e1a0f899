//! Interview question generation.
//!
//! Default: `TemplateQuestionGenerator` (deterministic, no network).
//! `LlmQuestionGenerator` asks Claude for tailored questions and falls back to the
//! templates when the call fails or returns something other than a list of strings.

pub mod prompts;
pub mod templates;

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobProfile;
use crate::scoring::ScoringResult;
use prompts::{MAX_PROMPT_SKILLS, QUESTIONS_PROMPT_TEMPLATE};
use templates::template_questions;

/// Everything a generator may look at. Matched and missing skills come from scoring.
#[derive(Debug, Clone, Copy)]
pub struct QuestionContext<'a> {
    pub candidate: &'a CandidateProfile,
    pub job: &'a JobProfile,
    pub scoring: &'a ScoringResult,
}

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, ctx: QuestionContext<'_>) -> Vec<String>;

    fn backend(&self) -> &'static str;
}

pub struct TemplateQuestionGenerator;

#[async_trait]
impl QuestionGenerator for TemplateQuestionGenerator {
    async fn generate(&self, ctx: QuestionContext<'_>) -> Vec<String> {
        template_questions(&ctx)
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}

pub struct LlmQuestionGenerator(pub LlmClient);

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(&self, ctx: QuestionContext<'_>) -> Vec<String> {
        let prompt = build_prompt(&ctx);
        match self.0.call_json::<Vec<String>>(&prompt, JSON_ONLY_SYSTEM).await {
            Ok(questions) if !questions.is_empty() => questions,
            Ok(_) => {
                warn!("LLM returned no interview questions, using templates");
                template_questions(&ctx)
            }
            Err(e) => {
                warn!("LLM question generation failed, using templates: {e}");
                template_questions(&ctx)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

fn build_prompt(ctx: &QuestionContext<'_>) -> String {
    let skills: Vec<&str> = ctx
        .candidate
        .skills
        .iter()
        .take(MAX_PROMPT_SKILLS)
        .map(String::as_str)
        .collect();

    QUESTIONS_PROMPT_TEMPLATE
        .replace("{name}", &ctx.candidate.name)
        .replace(
            "{experience_years}",
            &ctx.candidate.experience_years.to_string(),
        )
        .replace("{skills}", &skills.join(", "))
        .replace("{past_roles}", &ctx.candidate.past_roles.join(", "))
        .replace("{job_title}", &ctx.job.title)
        .replace("{required_skills}", &ctx.job.required_skills.join(", "))
        .replace(
            "{matched_skills}",
            &ctx.scoring.matched_required_skills.join(", "),
        )
        .replace(
            "{missing_skills}",
            &ctx.scoring.missing_required_skills.join(", "),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::scoring::score_candidate;

    fn candidate(skills: &[&str], years: u32, roles: &[&str]) -> CandidateProfile {
        CandidateProfile {
            name: "Jane Doe".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years: years,
            past_roles: roles.iter().map(|s| s.to_string()).collect(),
            ..CandidateProfile::default()
        }
    }

    fn fixtures(c: &CandidateProfile) -> (JobProfile, ScoringResult) {
        let catalog = Catalog::builtin();
        let job = catalog.job("digital_marketing_manager").unwrap().clone();
        let weights = *catalog.weights("marketing").unwrap();
        let scoring = score_candidate(c, &job, &weights);
        (job, scoring)
    }

    #[tokio::test]
    async fn test_templates_always_return_five_questions() {
        let c = candidate(&[], 0, &[]);
        let (job, scoring) = fixtures(&c);
        let questions = TemplateQuestionGenerator
            .generate(QuestionContext {
                candidate: &c,
                job: &job,
                scoring: &scoring,
            })
            .await;
        assert_eq!(questions.len(), 5);
    }

    #[test]
    fn test_gap_question_names_first_missing_skill() {
        let c = candidate(&["Social media", "Writing"], 1, &["Social Media Intern"]);
        let (job, scoring) = fixtures(&c);
        let questions = template_questions(&QuestionContext {
            candidate: &c,
            job: &job,
            scoring: &scoring,
        });

        assert!(questions[0].contains("digital marketing manager project"));
        assert!(questions[1].contains("stay current"));
        assert!(questions[2].contains("strong Social media skills"));
        assert!(questions[2].contains("learning Digital Marketing Strategy"));
        assert!(questions[3].contains("collaborated"));
    }

    #[test]
    fn test_senior_leader_gets_leadership_questions() {
        let c = candidate(
            &[
                "Digital Marketing Strategy",
                "Google Analytics",
                "Content Marketing",
                "Email Marketing",
            ],
            8,
            &["Marketing Manager"],
        );
        let (job, scoring) = fixtures(&c);
        let questions = template_questions(&QuestionContext {
            candidate: &c,
            job: &job,
            scoring: &scoring,
        });

        assert!(questions[1].contains("evolved"));
        assert!(questions[2].contains("comfort zone"));
        assert!(questions[3].contains("leadership style"));
    }

    #[test]
    fn test_gap_question_without_candidate_skills_says_core() {
        let c = candidate(&[], 0, &[]);
        let (job, scoring) = fixtures(&c);
        let questions = template_questions(&QuestionContext {
            candidate: &c,
            job: &job,
            scoring: &scoring,
        });
        assert!(questions[2].contains("strong core skills"));
    }

    #[test]
    fn test_prompt_includes_matched_and_missing_skills() {
        let c = candidate(&["Google Analytics"], 3, &["Analyst"]);
        let (job, scoring) = fixtures(&c);
        let prompt = build_prompt(&QuestionContext {
            candidate: &c,
            job: &job,
            scoring: &scoring,
        });

        assert!(prompt.contains("Matched Skills: Google Analytics"));
        assert!(prompt.contains("Missing Skills: Digital Marketing Strategy, Content Marketing"));
        assert!(prompt.contains("For Job: Digital Marketing Manager"));
        assert!(!prompt.contains("{name}"));
    }
}
