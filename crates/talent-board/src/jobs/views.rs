use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{Company, CompanyId, EmploymentType, ExperienceLevel, Job, JobId};

/// Listing row for a job posting.
#[derive(Debug, Clone, Serialize)]
pub struct JobCardView {
    pub id: JobId,
    pub title: String,
    pub company_id: CompanyId,
    pub company_name: String,
    pub location: String,
    pub salary_range: String,
    pub employment_type: EmploymentType,
    pub employment_type_label: &'static str,
    pub experience_level: ExperienceLevel,
    pub experience_level_label: &'static str,
    pub remote_option: bool,
    pub posted_date: NaiveDate,
    pub posted_label: String,
}

impl JobCardView {
    pub fn from_job(job: &Job, today: NaiveDate) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company_id: job.company.id,
            company_name: job.company.name.clone(),
            location: job.location.clone(),
            salary_range: job.salary_range.clone(),
            employment_type: job.employment_type,
            employment_type_label: job.employment_type.label(),
            experience_level: job.experience_level,
            experience_level_label: job.experience_level.label(),
            remote_option: job.remote_option,
            posted_date: job.posted_date,
            posted_label: posted_label(job.posted_date, today),
        }
    }
}

/// Company page: the company plus every posting it owns.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfileView {
    pub company: Company,
    pub open_positions: usize,
    pub jobs: Vec<JobCardView>,
}

impl CompanyProfileView {
    pub fn new(company: &Company, jobs: &[&Job], today: NaiveDate) -> Self {
        Self {
            company: company.clone(),
            open_positions: jobs.len(),
            jobs: jobs
                .iter()
                .map(|job| JobCardView::from_job(job, today))
                .collect(),
        }
    }
}

/// Relative age of a posting: "1 day ago", "4 days ago", "2 weeks ago", or the date itself.
pub fn posted_label(posted: NaiveDate, today: NaiveDate) -> String {
    let days = (today - posted).num_days().abs();
    match days {
        1 => "1 day ago".to_string(),
        0..=6 => format!("{days} days ago"),
        7..=29 => format!("{} weeks ago", (days + 6) / 7),
        _ => posted.format("%-m/%-d/%Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn posted_label_buckets_by_age() {
        let posted = date(2025, 1, 10);
        assert_eq!(posted_label(posted, date(2025, 1, 10)), "0 days ago");
        assert_eq!(posted_label(posted, date(2025, 1, 11)), "1 day ago");
        assert_eq!(posted_label(posted, date(2025, 1, 16)), "6 days ago");
        assert_eq!(posted_label(posted, date(2025, 1, 17)), "1 weeks ago");
        assert_eq!(posted_label(posted, date(2025, 1, 18)), "2 weeks ago");
        assert_eq!(posted_label(posted, date(2025, 2, 8)), "5 weeks ago");
        assert_eq!(posted_label(posted, date(2025, 2, 9)), "1/10/2025");
    }

    #[test]
    fn card_carries_labels_and_company() {
        let jobs = seed::jobs();
        let card = JobCardView::from_job(&jobs[2], date(2025, 1, 10));
        assert_eq!(card.company_name, "CloudTech Innovations");
        assert_eq!(card.employment_type_label, "Full-time");
        assert_eq!(card.experience_level_label, "Mid Level");
        assert_eq!(card.posted_label, "2 days ago");
    }
}
