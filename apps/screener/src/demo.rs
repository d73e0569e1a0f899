//! Sample resumes for `screener screen --demo`.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoCandidate {
    Strong,
    Weak,
}

impl DemoCandidate {
    pub fn resume(self) -> &'static str {
        match self {
            DemoCandidate::Strong => STRONG_RESUME,
            DemoCandidate::Weak => WEAK_RESUME,
        }
    }
}

pub const STRONG_RESUME: &str = r#"
JOHN SMITH
john.smith@email.com | (555) 123-4567 | LinkedIn.com/in/johnsmith

PROFESSIONAL SUMMARY
Results-driven Digital Marketing Manager with 7 years of experience building and executing
integrated marketing campaigns. Proven track record increasing brand awareness by 250% and
driving 40% revenue growth through data-driven strategies.

CORE COMPETENCIES
- Digital Marketing Strategy & Campaign Management
- Google Analytics & Data Analysis
- Content Marketing & SEO
- Email Marketing Automation
- Social Media Marketing & Community Management
- Market Research & Competitive Analysis
- Marketing Automation (HubSpot, Marketo)
- Project Management
- Team Leadership & Cross-functional Collaboration

PROFESSIONAL EXPERIENCE

Senior Digital Marketing Manager | TechCorp Inc. | 2021 - Present
- Led cross-functional team of 5 marketing professionals managing $2M annual budget
- Designed and executed integrated digital campaigns resulting in 45% increase in qualified leads
- Implemented marketing automation workflows reducing manual work by 60%
- Managed SEO strategy resulting in 120% increase in organic traffic
- A/B tested landing pages achieving 35% improvement in conversion rate

Digital Marketing Specialist | GrowthWave Agency | 2019 - 2021
- Managed digital marketing campaigns for 15+ B2B SaaS clients
- Developed content marketing strategy generating 500K monthly impressions
- Optimized Google Ads campaigns reducing cost-per-acquisition by 28%
- Trained junior team members on marketing analytics and reporting
- Increased email marketing engagement rates by 42%

Marketing Coordinator | SmartBrand Solutions | 2016 - 2019
- Created and executed social media campaigns across 4 platforms
- Analyzed marketing metrics and prepared monthly performance reports
- Supported product launches with integrated marketing communications
- Collaborated with sales team to develop marketing materials and leads lists

EDUCATION
Master of Business Administration (MBA) in Marketing | University of California | 2016
Bachelor of Science in Business Administration | State University | 2015

CERTIFICATIONS
- Google Analytics Certification (2020)
- HubSpot Inbound Marketing Certification (2021)
- Google Ads Certification (2022)

ADDITIONAL SKILLS
- Advanced Excel & Google Sheets
- Figma & Canva (Design basics)
- Python for data analysis (beginner)
- Salesforce & CRM systems
"#;

pub const WEAK_RESUME: &str = r#"
JANE DOE
jane.doe@email.com

SUMMARY
Recently graduated student looking for marketing opportunities. Have done some social media
work and basic content creation. Eager to learn and grow in the marketing field.

EXPERIENCE
Social Media Intern | LocalBusiness.com | 2024 - Present
- Posted content on Facebook and Instagram
- Wrote blog articles on various topics
- Created social media graphics
- Responded to customer inquiries

School Projects | University | 2022-2024
- Created marketing presentation for class project
- Designed poster for university event
- Participated in marketing club

EDUCATION
Bachelor of Science in Communications | University | Expected May 2024
Relevant Coursework: Introduction to Marketing, Digital Communications, Social Media 101

SKILLS
- Social media
- Writing
- Microsoft Office
- Instagram & TikTok
- Graphic design (basic)
"#;
