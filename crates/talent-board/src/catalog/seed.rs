//! Built-in demo catalog: three companies, five postings, five applications.

use std::num::NonZeroU32;

use chrono::{DateTime, NaiveDate, Utc};

use crate::ats::{
    Application, ApplicationId, ApplicationNote, ApplicationSource, ApplicationStatus, AtsCatalog,
    Candidate, CandidateId, Education, Interview, InterviewFeedback, InterviewStatus,
    InterviewType, Rating, Recommendation,
};
use crate::jobs::{Company, CompanyId, EmploymentType, ExperienceLevel, Job, JobCatalog, JobId};

fn january(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap_or_default()
}

fn january_at(day: u32, hour: u32) -> DateTime<Utc> {
    january(day)
        .and_hms_opt(hour, 0, 0)
        .unwrap_or_default()
        .and_utc()
}

fn minutes(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn companies() -> Vec<Company> {
    Vec::from(company_array())
}

fn company_array() -> [Company; 3] {
    [
        Company {
            id: CompanyId(1),
            name: "TechCorp Solutions".into(),
            description: "Leading technology company specializing in AI and cloud solutions."
                .into(),
            industry: "Technology".into(),
            size: "500-1000".into(),
            location: "San Francisco, CA".into(),
            founded_year: Some(2010),
            website: Some("https://techcorp.com".into()),
            logo: None,
        },
        Company {
            id: CompanyId(2),
            name: "DataFlow Systems".into(),
            description: "Data analytics and business intelligence solutions provider.".into(),
            industry: "Data Analytics".into(),
            size: "100-500".into(),
            location: "New York, NY".into(),
            founded_year: Some(2015),
            website: Some("https://dataflow.com".into()),
            logo: None,
        },
        Company {
            id: CompanyId(3),
            name: "CloudTech Innovations".into(),
            description: "Cloud infrastructure and DevOps solutions company.".into(),
            industry: "Cloud Computing".into(),
            size: "50-100".into(),
            location: "Seattle, WA".into(),
            founded_year: Some(2018),
            website: Some("https://cloudtech.com".into()),
            logo: None,
        },
    ]
}

pub fn jobs() -> Vec<Job> {
    let [techcorp, dataflow, cloudtech] = company_array();

    vec![
        Job {
            id: JobId(1),
            title: "Senior Frontend Developer".into(),
            company: techcorp.clone(),
            location: "San Francisco, CA".into(),
            salary_range: "$120,000 - $160,000".into(),
            employment_type: EmploymentType::FullTime,
            description: "We are looking for a passionate Senior Frontend Developer to join our \
                          growing team. You will be responsible for developing user-facing \
                          features using modern JavaScript frameworks."
                .into(),
            requirements: strings(&[
                "5+ years React experience",
                "TypeScript proficiency",
                "Modern CSS frameworks",
                "Testing frameworks (Jest, Cypress)",
            ]),
            posted_date: january(10),
            application_deadline: None,
            remote_option: true,
            experience_level: ExperienceLevel::Senior,
        },
        Job {
            id: JobId(2),
            title: "Data Scientist".into(),
            company: dataflow.clone(),
            location: "New York, NY".into(),
            salary_range: "$100,000 - $140,000".into(),
            employment_type: EmploymentType::FullTime,
            description: "Join our data science team to build machine learning models and \
                          derive insights from large datasets."
                .into(),
            requirements: strings(&[
                "Python/R proficiency",
                "Machine Learning experience",
                "SQL expertise",
                "Statistics background",
            ]),
            posted_date: january(9),
            application_deadline: None,
            remote_option: false,
            experience_level: ExperienceLevel::Mid,
        },
        Job {
            id: JobId(3),
            title: "DevOps Engineer".into(),
            company: cloudtech,
            location: "Seattle, WA".into(),
            salary_range: "$110,000 - $150,000".into(),
            employment_type: EmploymentType::FullTime,
            description: "Looking for a DevOps Engineer to help us scale our cloud \
                          infrastructure and improve our deployment processes."
                .into(),
            requirements: strings(&[
                "AWS/Azure experience",
                "Docker & Kubernetes",
                "CI/CD pipelines",
                "Infrastructure as Code",
            ]),
            posted_date: january(8),
            application_deadline: None,
            remote_option: true,
            experience_level: ExperienceLevel::Mid,
        },
        Job {
            id: JobId(4),
            title: "Junior Full Stack Developer".into(),
            company: techcorp,
            location: "San Francisco, CA".into(),
            salary_range: "$80,000 - $100,000".into(),
            employment_type: EmploymentType::FullTime,
            description: "Great opportunity for a junior developer to grow their skills in a \
                          supportive environment."
                .into(),
            requirements: strings(&[
                "JavaScript fundamentals",
                "React basics",
                "Node.js experience",
                "Git version control",
            ]),
            posted_date: january(7),
            application_deadline: None,
            remote_option: true,
            experience_level: ExperienceLevel::Entry,
        },
        Job {
            id: JobId(5),
            title: "Product Manager".into(),
            company: dataflow,
            location: "Remote".into(),
            salary_range: "$130,000 - $170,000".into(),
            employment_type: EmploymentType::FullTime,
            description: "Lead product strategy and work with cross-functional teams to deliver \
                          exceptional user experiences."
                .into(),
            requirements: strings(&[
                "3+ years product management",
                "Agile/Scrum experience",
                "Data-driven decision making",
                "Stakeholder management",
            ]),
            posted_date: january(6),
            application_deadline: None,
            remote_option: true,
            experience_level: ExperienceLevel::Senior,
        },
    ]
}

pub fn job_catalog() -> JobCatalog {
    JobCatalog::new(companies(), jobs()).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: u32,
    first_name: &str,
    last_name: &str,
    phone: &str,
    location: &str,
    experience_years: u8,
    current: Option<(&str, &str)>,
    skills: &[&str],
    education: Education,
) -> Candidate {
    let handle = format!("{first_name}{last_name}").to_lowercase();
    Candidate {
        id: CandidateId(id),
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: format!(
            "{}.{}@email.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: Some(phone.into()),
        location: location.into(),
        linkedin_url: (id <= 3).then(|| format!("https://linkedin.com/in/{handle}")),
        portfolio_url: (id == 1).then(|| format!("https://{handle}.dev")),
        experience_years,
        current_position: current.map(|(position, _)| position.to_string()),
        current_company: current.map(|(_, company)| company.to_string()),
        skills: strings(skills),
        education: vec![education],
    }
}

fn education(
    id: u32,
    institution: &str,
    degree: &str,
    field_of_study: &str,
    graduation_year: u16,
    gpa: f32,
) -> Education {
    Education {
        id,
        institution: institution.into(),
        degree: degree.into(),
        field_of_study: field_of_study.into(),
        graduation_year,
        gpa: Some(gpa),
    }
}

pub fn candidates() -> Vec<Candidate> {
    Vec::from(candidate_array())
}

fn candidate_array() -> [Candidate; 5] {
    [
        candidate(
            1,
            "Sarah",
            "Johnson",
            "+1 (555) 123-4567",
            "San Francisco, CA",
            5,
            Some(("Frontend Developer", "StartupCorp")),
            &["React", "TypeScript", "Node.js", "GraphQL", "AWS"],
            education(
                1,
                "Stanford University",
                "Bachelor of Science",
                "Computer Science",
                2019,
                3.8,
            ),
        ),
        candidate(
            2,
            "Michael",
            "Chen",
            "+1 (555) 987-6543",
            "New York, NY",
            3,
            Some(("Data Analyst", "DataTech Inc")),
            &["Python", "SQL", "Machine Learning", "Tableau", "R"],
            education(2, "MIT", "Master of Science", "Data Science", 2021, 3.9),
        ),
        candidate(
            3,
            "Emily",
            "Rodriguez",
            "+1 (555) 456-7890",
            "Seattle, WA",
            4,
            Some(("DevOps Engineer", "CloudSystems")),
            &["Docker", "Kubernetes", "AWS", "Terraform", "Jenkins"],
            education(
                3,
                "University of Washington",
                "Bachelor of Science",
                "Computer Engineering",
                2020,
                3.7,
            ),
        ),
        candidate(
            4,
            "David",
            "Kim",
            "+1 (555) 321-0987",
            "Austin, TX",
            1,
            None,
            &["JavaScript", "React", "Python", "Git"],
            education(
                4,
                "University of Texas at Austin",
                "Bachelor of Science",
                "Computer Science",
                2023,
                3.6,
            ),
        ),
        candidate(
            5,
            "Lisa",
            "Wang",
            "+1 (555) 654-3210",
            "Los Angeles, CA",
            6,
            Some(("Senior Frontend Developer", "TechGiant")),
            &["React", "Vue.js", "TypeScript", "Node.js", "GraphQL"],
            education(5, "UCLA", "Bachelor of Science", "Computer Science", 2018, 3.5),
        ),
    ]
}

fn note(id: u32, author: &str, content: &str, day: u32) -> ApplicationNote {
    ApplicationNote {
        id,
        author: author.into(),
        content: content.into(),
        created_date: january(day),
        is_internal: true,
    }
}

fn feedback(
    scores: [u8; 4],
    comments: &str,
    recommendation: Recommendation,
) -> InterviewFeedback {
    let [technical_skills, communication, cultural_fit, overall_rating] = scores;
    InterviewFeedback {
        technical_skills: Rating::saturating(technical_skills),
        communication: Rating::saturating(communication),
        cultural_fit: Rating::saturating(cultural_fit),
        overall_rating: Rating::saturating(overall_rating),
        comments: comments.into(),
        recommendation,
    }
}

fn completed_interview(
    id: u32,
    kind: InterviewType,
    scheduled_date: DateTime<Utc>,
    duration: u32,
    interviewer: &str,
    feedback: InterviewFeedback,
) -> Interview {
    Interview {
        id,
        kind,
        scheduled_date,
        duration_minutes: minutes(duration),
        interviewer: interviewer.into(),
        status: InterviewStatus::Completed,
        location: None,
        meeting_link: None,
        notes: None,
        feedback: Some(feedback),
    }
}

pub fn applications() -> Vec<Application> {
    let [sarah, michael, emily, david, lisa] = candidate_array();

    let mut phone_screen = completed_interview(
        1,
        InterviewType::PhoneScreening,
        january_at(10, 14),
        30,
        "Jane Smith (HR)",
        feedback(
            [4, 5, 5, 4],
            "Excellent candidate, moving to technical round",
            Recommendation::Hire,
        ),
    );
    phone_screen.notes = Some("Great communication skills, cultural fit looks good".into());

    vec![
        Application {
            id: ApplicationId(1),
            job_id: JobId(1),
            candidate: sarah,
            status: ApplicationStatus::TechnicalInterview,
            applied_date: january(8),
            last_updated: january(12),
            resume_url: Some("/resumes/sarah-johnson.pdf".into()),
            cover_letter: Some(
                "I am excited to apply for the Senior Frontend Developer position...".into(),
            ),
            notes: vec![
                note(
                    1,
                    "HR Manager",
                    "Strong technical background, excellent portfolio",
                    9,
                ),
                note(
                    2,
                    "Tech Lead",
                    "Impressed with React expertise and problem-solving approach",
                    11,
                ),
            ],
            interviews: vec![
                phone_screen,
                Interview {
                    id: 2,
                    kind: InterviewType::Technical,
                    scheduled_date: january_at(15, 10),
                    duration_minutes: minutes(90),
                    interviewer: "John Doe (Tech Lead)".into(),
                    status: InterviewStatus::Scheduled,
                    location: None,
                    meeting_link: Some("https://meet.google.com/abc-defg-hij".into()),
                    notes: None,
                    feedback: None,
                },
            ],
            rating: Some(Rating::saturating(4)),
            tags: strings(&["strong-candidate", "react-expert"]),
            source: ApplicationSource::Linkedin,
        },
        Application {
            id: ApplicationId(2),
            job_id: JobId(2),
            candidate: michael,
            status: ApplicationStatus::Screening,
            applied_date: january(7),
            last_updated: january(10),
            resume_url: Some("/resumes/michael-chen.pdf".into()),
            cover_letter: None,
            notes: vec![note(
                3,
                "Hiring Manager",
                "Good technical skills, need to assess cultural fit",
                10,
            )],
            interviews: Vec::new(),
            rating: Some(Rating::saturating(3)),
            tags: strings(&["data-science", "python"]),
            source: ApplicationSource::Direct,
        },
        Application {
            id: ApplicationId(3),
            job_id: JobId(3),
            candidate: emily,
            status: ApplicationStatus::OfferExtended,
            applied_date: january(5),
            last_updated: january(13),
            resume_url: Some("/resumes/emily-rodriguez.pdf".into()),
            cover_letter: Some(
                "I have extensive experience in DevOps and cloud infrastructure...".into(),
            ),
            notes: vec![note(
                4,
                "CTO",
                "Exceptional candidate, perfect fit for our DevOps needs",
                12,
            )],
            interviews: vec![
                completed_interview(
                    3,
                    InterviewType::PhoneScreening,
                    january_at(8, 15),
                    30,
                    "Sarah Wilson (HR)",
                    feedback(
                        [5, 4, 5, 5],
                        "Outstanding candidate with deep DevOps knowledge",
                        Recommendation::Hire,
                    ),
                ),
                completed_interview(
                    4,
                    InterviewType::Technical,
                    january_at(11, 11),
                    120,
                    "Mike Johnson (DevOps Lead)",
                    feedback(
                        [5, 4, 5, 5],
                        "Excellent technical skills, great problem-solving approach",
                        Recommendation::Hire,
                    ),
                ),
                completed_interview(
                    5,
                    InterviewType::Final,
                    january_at(13, 14),
                    60,
                    "Alex Thompson (CTO)",
                    feedback(
                        [5, 5, 5, 5],
                        "Perfect fit for the team, extending offer immediately",
                        Recommendation::Hire,
                    ),
                ),
            ],
            rating: Some(Rating::saturating(5)),
            tags: strings(&["top-candidate", "devops-expert", "aws-certified"]),
            source: ApplicationSource::Referral,
        },
        Application {
            id: ApplicationId(4),
            job_id: JobId(4),
            candidate: david,
            status: ApplicationStatus::Applied,
            applied_date: january(12),
            last_updated: january(12),
            resume_url: Some("/resumes/david-kim.pdf".into()),
            cover_letter: None,
            notes: Vec::new(),
            interviews: Vec::new(),
            rating: Some(Rating::saturating(2)),
            tags: strings(&["entry-level", "new-grad"]),
            source: ApplicationSource::CompanyWebsite,
        },
        Application {
            id: ApplicationId(5),
            job_id: JobId(1),
            candidate: lisa,
            status: ApplicationStatus::Rejected,
            applied_date: january(6),
            last_updated: january(11),
            resume_url: Some("/resumes/lisa-wang.pdf".into()),
            cover_letter: None,
            notes: vec![note(
                5,
                "Hiring Manager",
                "Overqualified for the position, looking for more senior role",
                11,
            )],
            interviews: vec![completed_interview(
                6,
                InterviewType::PhoneScreening,
                january_at(9, 16),
                30,
                "Jane Smith (HR)",
                feedback(
                    [5, 4, 3, 3],
                    "Great skills but seems overqualified and may not stay long",
                    Recommendation::NoHire,
                ),
            )],
            rating: Some(Rating::saturating(2)),
            tags: strings(&["overqualified"]),
            source: ApplicationSource::Indeed,
        },
    ]
}

pub fn ats_catalog() -> AtsCatalog {
    AtsCatalog::new(applications()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalogs_validate() {
        assert!(JobCatalog::new(companies(), jobs()).is_ok());
        assert!(AtsCatalog::new(applications()).is_ok());
        assert_eq!(job_catalog().jobs().len(), 5);
        assert_eq!(ats_catalog().len(), 5);
    }

    #[test]
    fn candidates_line_up_with_their_applications() {
        let names: Vec<String> = applications()
            .iter()
            .map(|application| application.candidate.full_name())
            .collect();
        assert_eq!(
            names,
            vec![
                "Sarah Johnson",
                "Michael Chen",
                "Emily Rodriguez",
                "David Kim",
                "Lisa Wang"
            ]
        );
        let chen = &applications()[1].candidate;
        assert_eq!(chen.email, "michael.chen@email.com");
        assert_eq!(chen.portfolio_url, None);
    }

    #[test]
    fn interview_ids_are_unique_across_applications() {
        let mut ids: Vec<u32> = applications()
            .iter()
            .flat_map(|application| application.interviews.iter().map(|interview| interview.id))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
