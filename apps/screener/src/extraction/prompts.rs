/// Candidate extraction prompt. Replace `{resume_text}` before sending.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract structured candidate information from this resume.

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "Full name",
  "email": "Email address",
  "phone": "Phone number, or null",
  "skills": ["Technical and professional skills"],
  "experience_years": 5,
  "education": ["Bachelor's Degree"],
  "past_roles": ["Job titles held, most recent first"],
  "summary": "2-3 sentence professional summary"
}

Rules:
- `experience_years` is an integer: total years of relevant experience.
- Map each degree to one of: "High School or Certificate", "Associate Degree",
  "Bachelor's Degree", "Master's Degree", "PhD". Certifications may be listed verbatim.
- Keep skill names as written in the resume; do not invent skills.

RESUME:
{resume_text}"#;
