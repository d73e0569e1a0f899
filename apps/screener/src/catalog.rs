//! Built-in job profiles and weight presets.
//!
//! The catalog is plain data built by value and injected where it is needed
//! (CLI, `AppState`). Nothing here is global or mutable.

use serde::Serialize;

use crate::models::job::{JobProfile, WeightConfig};

#[derive(Debug, Clone, Serialize)]
pub struct CatalogJob {
    pub key: String,
    pub profile: JobProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightPreset {
    pub key: String,
    pub weights: WeightConfig,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    jobs: Vec<CatalogJob>,
    weights: Vec<WeightPreset>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            jobs: builtin_jobs(),
            weights: builtin_weights(),
        }
    }

    pub fn jobs(&self) -> &[CatalogJob] {
        &self.jobs
    }

    pub fn weight_presets(&self) -> &[WeightPreset] {
        &self.weights
    }

    pub fn job(&self, key: &str) -> Option<&JobProfile> {
        self.jobs.iter().find(|j| j.key == key).map(|j| &j.profile)
    }

    pub fn weights(&self, key: &str) -> Option<&WeightConfig> {
        self.weights.iter().find(|w| w.key == key).map(|w| &w.weights)
    }
}

fn job(
    title: &str,
    required: &[&str],
    minimum_experience_years: u32,
    preferred: &[&str],
    nice_to_have: &[&str],
    minimum_education: &str,
) -> JobProfile {
    let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    JobProfile {
        title: title.to_string(),
        required_skills: owned(required),
        preferred_skills: owned(preferred),
        nice_to_have_skills: owned(nice_to_have),
        minimum_experience_years,
        minimum_education: minimum_education.to_string(),
    }
}

const HIGH_SCHOOL: &str = "High School or Certificate";
const BACHELOR: &str = "Bachelor's Degree";

fn builtin_jobs() -> Vec<CatalogJob> {
    let entries = [
        // Marketing
        (
            "digital_marketing_manager",
            job(
                "Digital Marketing Manager",
                &["Digital Marketing Strategy", "Google Analytics", "Content Marketing", "Email Marketing"],
                5,
                &["Marketing Automation", "SEO", "A/B Testing", "Data Analysis", "Social Media Marketing"],
                &["Python", "Figma", "Salesforce", "CRM", "Paid Advertising"],
                BACHELOR,
            ),
        ),
        (
            "social_media_manager",
            job(
                "Social Media Manager",
                &["Social Media Marketing", "Content Creation", "Community Management", "Platform Analytics"],
                2,
                &["Copywriting", "Graphic Design", "Video Editing", "A/B Testing", "Social Media Strategy"],
                &["Influencer Relations", "Crisis Management", "Scheduling Tools", "Paid Social Ads", "Photography"],
                HIGH_SCHOOL,
            ),
        ),
        (
            "content_strategist",
            job(
                "Content Strategist",
                &["Content Strategy", "SEO", "Copywriting", "Editorial Planning"],
                3,
                &["Analytics", "User Research", "Content Management Systems", "Audience Segmentation", "Project Management"],
                &["Video Scripting", "Graphic Design", "Publishing Platforms", "Keyword Research Tools", "Marketing Automation"],
                BACHELOR,
            ),
        ),
        (
            "seo_specialist",
            job(
                "SEO Specialist",
                &["SEO", "Keyword Research", "Technical SEO", "Analytics"],
                3,
                &["Link Building", "Content Optimization", "Google Search Console", "Schema Markup", "Competitor Analysis"],
                &["Python", "HTML/CSS", "JavaScript Basics", "SEO Tools", "Report Writing"],
                HIGH_SCHOOL,
            ),
        ),
        (
            "ppc_specialist",
            job(
                "PPC Specialist",
                &["Google Ads", "Paid Advertising", "Analytics", "Campaign Management"],
                2,
                &["Facebook Ads", "LinkedIn Ads", "A/B Testing", "Conversion Tracking", "Budget Management"],
                &["Python", "Data Analysis", "Tag Management", "CRM Integration", "Marketing Automation"],
                HIGH_SCHOOL,
            ),
        ),
        // Design
        (
            "graphic_designer",
            job(
                "Graphic Designer",
                &["Graphic Design", "Adobe Creative Suite", "Visual Communication", "Layout Design"],
                2,
                &["UX/UI Design", "Figma", "Branding", "Web Design", "Typography"],
                &["Adobe XD", "Sketch", "Illustration", "Motion Graphics", "HTML/CSS Basics"],
                HIGH_SCHOOL,
            ),
        ),
        (
            "web_designer",
            job(
                "Web Designer",
                &["Web Design", "Figma", "Responsive Design", "User Experience"],
                3,
                &["Adobe XD", "Prototyping", "Wireframing", "HTML/CSS", "JavaScript Basics"],
                &["Interaction Design", "Accessibility", "Design Systems", "Motion Design", "CMS Knowledge"],
                HIGH_SCHOOL,
            ),
        ),
        // Development
        (
            "frontend_developer",
            job(
                "Frontend Developer",
                &["JavaScript", "HTML", "CSS", "React"],
                3,
                &["TypeScript", "Vue.js", "REST API", "Git", "Testing"],
                &["Next.js", "Webpack", "GraphQL", "Accessibility", "Performance Optimization"],
                BACHELOR,
            ),
        ),
        (
            "backend_developer",
            job(
                "Backend Developer",
                &["Python", "SQL", "API Development", "Database Design"],
                3,
                &["Django", "FastAPI", "REST APIs", "Git", "Cloud Services"],
                &["Docker", "Kubernetes", "Redis", "GraphQL", "Microservices"],
                BACHELOR,
            ),
        ),
    ];

    entries
        .into_iter()
        .map(|(key, profile)| CatalogJob {
            key: key.to_string(),
            profile,
        })
        .collect()
}

fn builtin_weights() -> Vec<WeightPreset> {
    let preset = |key: &str, required, preferred, experience, education, soft| WeightPreset {
        key: key.to_string(),
        weights: WeightConfig {
            required_skills_weight: required,
            preferred_skills_weight: preferred,
            experience_weight: experience,
            education_weight: education,
            soft_skills_weight: soft,
        },
    };

    vec![
        // hard skills dominate (development, design)
        preset("technical", 0.45, 0.25, 0.15, 0.05, 0.10),
        preset("marketing", 0.35, 0.20, 0.25, 0.10, 0.10),
        preset("management", 0.30, 0.15, 0.25, 0.15, 0.15),
        preset("entry_level", 0.25, 0.15, 0.15, 0.25, 0.20),
    ]
}
