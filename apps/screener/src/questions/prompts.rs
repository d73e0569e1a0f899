/// Interview question prompt.
/// Replace: {name}, {experience_years}, {skills}, {past_roles}, {job_title},
///          {required_skills}, {matched_skills}, {missing_skills}
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate 5 personalized interview questions for a candidate with this profile:

Candidate: {name}
Experience: {experience_years} years
Skills: {skills}
Past Roles: {past_roles}

For Job: {job_title}
Required Skills: {required_skills}
Matched Skills: {matched_skills}
Missing Skills: {missing_skills}

Create questions that:
1. Probe technical competency in matched areas
2. Address gaps in missing required skills
3. Explore relevant past experience
4. Assess problem-solving and soft skills
5. Determine motivation and culture fit

Return a JSON array of 5 strings (the questions) and nothing else."#;

/// Skills listed in the prompt are capped to keep it short.
pub const MAX_PROMPT_SKILLS: usize = 10;
