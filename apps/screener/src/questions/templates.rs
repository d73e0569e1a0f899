//! Template interview questions. Always returns exactly five.

use super::QuestionContext;

const SENIOR_YEARS: u32 = 5;

pub fn template_questions(ctx: &QuestionContext<'_>) -> Vec<String> {
    let title = ctx.job.title.to_lowercase();

    let core = format!(
        "Can you walk us through your most successful {title} project \
         and the metrics you used to measure success?"
    );

    let depth = if ctx.candidate.experience_years >= SENIOR_YEARS {
        format!(
            "How has your approach to {title} work evolved over the years, \
             and what key lessons have you learned?"
        )
    } else {
        format!(
            "What is your understanding of current best practices for a {title}, \
             and how do you stay current with industry trends?"
        )
    };

    let gap = match ctx.scoring.missing_required_skills.first() {
        Some(missing) => {
            let strength = ctx
                .candidate
                .skills
                .first()
                .map(String::as_str)
                .unwrap_or("core");
            format!(
                "While we see you have strong {strength} skills, \
                 how would you approach learning {missing} in this role?"
            )
        }
        None => "Tell us about a time when you had to develop a skill outside your comfort zone. \
                 How did you approach it?"
            .to_string(),
    };

    let led_before = ctx.candidate.past_roles.iter().any(|role| {
        let role = role.to_lowercase();
        role.contains("lead") || role.contains("manager")
    });
    let team = if led_before {
        "Describe your leadership style and how you approach managing and developing team members."
    } else {
        "Tell us about a time you successfully collaborated with people from different departments \
         or with different expertise. What made it effective?"
    };

    let motivation =
        "What attracts you to this role and our company, and where do you see yourself in 3 years?";

    vec![core, depth, gap, team.to_string(), motivation.to_string()]
}
