//! Human-readable report for terminal output.

use std::fmt::Write;

use crate::models::report::ScreeningReport;

const WIDTH: usize = 80;
const MAX_PREFERRED_SHOWN: usize = 5;

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{:-^width$}", title, width = WIDTH);
}

pub fn render_text(report: &ScreeningReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDTH);
    let screening = &report.screening;

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "CANDIDATE SCREENING REPORT");
    let _ = writeln!(out, "{rule}");

    let _ = writeln!(out, "\nCandidate: {}", report.candidate.name);
    let _ = writeln!(out, "Email: {}", report.candidate.email);
    let _ = writeln!(out, "Position: {}", screening.job_title);
    let _ = writeln!(
        out,
        "Screening Date: {}",
        screening.screening_date.format("%Y-%m-%d")
    );

    heading(&mut out, "OVERALL SCORE");
    let _ = writeln!(
        out,
        "Overall: {:.1}/100 | Recommendation: {}",
        screening.overall_score,
        screening.recommendation.as_str().to_uppercase()
    );
    let _ = writeln!(
        out,
        "Confidence: {}",
        screening.confidence.as_str().to_uppercase()
    );

    heading(&mut out, "SCORE BREAKDOWN");
    let _ = writeln!(out, "Skills Match:        {:6.1}/100", report.scores.skills);
    let _ = writeln!(out, "Experience:          {:6.1}/100", report.scores.experience);
    let _ = writeln!(out, "Education:           {:6.1}/100", report.scores.education);

    let skills = &report.skills_analysis;
    heading(&mut out, "SKILLS ANALYSIS");
    let _ = writeln!(
        out,
        "Matched Required Skills ({}):",
        skills.matched_required.len()
    );
    for skill in &skills.matched_required {
        let _ = writeln!(out, "  ✓ {skill}");
    }
    if !skills.missing_required.is_empty() {
        let _ = writeln!(
            out,
            "\nMissing Required Skills ({}):",
            skills.missing_required.len()
        );
        for skill in &skills.missing_required {
            let _ = writeln!(out, "  ✗ {skill}");
        }
    }
    if !skills.matched_preferred.is_empty() {
        let _ = writeln!(
            out,
            "\nMatched Preferred Skills ({}):",
            skills.matched_preferred.len()
        );
        for skill in skills.matched_preferred.iter().take(MAX_PREFERRED_SHOWN) {
            let _ = writeln!(out, "  + {skill}");
        }
    }

    heading(&mut out, "ASSESSMENTS");
    let _ = writeln!(out, "Experience: {}", report.assessments.experience);
    let _ = writeln!(out, "Education:  {}", report.assessments.education);

    heading(&mut out, "RECOMMENDATION");
    let _ = writeln!(out, "{}", screening.reasoning);

    heading(&mut out, "INTERVIEW QUESTIONS");
    for (i, question) in report.interview_questions.iter().enumerate() {
        let _ = writeln!(out, "\n{}. {question}", i + 1);
    }

    let _ = writeln!(out, "\n{rule}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::CandidateProfile;
    use crate::models::job::JobProfile;
    use crate::scoring::recommend;
    use crate::scoring::ScoringResult;
    use crate::screening::build_report;
    use uuid::Uuid;

    fn report(missing: Vec<String>, preferred: Vec<String>) -> ScreeningReport {
        let job = JobProfile {
            title: "SEO Specialist".to_string(),
            required_skills: vec![],
            preferred_skills: vec![],
            nice_to_have_skills: vec![],
            minimum_experience_years: 3,
            minimum_education: "High School or Certificate".to_string(),
        };
        let scoring = ScoringResult {
            overall_score: 64.0,
            skills_score: 45.5,
            experience_score: 80.0,
            education_score: 95.0,
            soft_skills_score: 60.0,
            matched_required_skills: vec!["SEO".to_string()],
            missing_required_skills: missing,
            matched_preferred_skills: preferred,
            experience_assessment: "Meets requirement with 3 years of experience".to_string(),
            education_assessment: "Meets or exceeds requirement: Bachelor's Degree".to_string(),
        };
        let rec = recommend(scoring.overall_score, &scoring.missing_required_skills);
        build_report(
            Uuid::new_v4(),
            CandidateProfile::default(),
            &job,
            scoring,
            rec,
            vec!["First?".to_string(), "Second?".to_string()],
        )
    }

    #[test]
    fn test_render_contains_sections_and_scores() {
        let text = render_text(&report(vec!["Analytics".to_string()], vec![]));
        assert!(text.contains("CANDIDATE SCREENING REPORT"));
        assert!(text.contains("Overall: 64.0/100 | Recommendation: REVIEW"));
        assert!(text.contains("Confidence: LOW"));
        assert!(text.contains("Skills Match:          45.5/100"));
        assert!(text.contains("  ✓ SEO"));
        assert!(text.contains("  ✗ Analytics"));
        assert!(text.contains("\n2. Second?"));
    }

    #[test]
    fn test_render_omits_empty_missing_section() {
        let text = render_text(&report(vec![], vec![]));
        assert!(!text.contains("Missing Required Skills"));
        assert!(!text.contains("Matched Preferred Skills"));
    }

    #[test]
    fn test_render_caps_preferred_list() {
        let preferred: Vec<String> = (1..=7).map(|i| format!("Pref{i}")).collect();
        let text = render_text(&report(vec![], preferred));
        assert!(text.contains("Matched Preferred Skills (7):"));
        assert!(text.contains("  + Pref5"));
        assert!(!text.contains("  + Pref6"));
    }
}
