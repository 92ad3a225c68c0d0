use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::ats::{
    Application, ApplicationId, AtsCatalog, AtsFilterCriteria, InterviewRequest, InterviewType,
};
use crate::catalog::seed;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2025, 1, 14)
}

pub(super) fn instant(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0)
        .single()
        .expect("valid instant")
}

pub(super) fn catalog() -> AtsCatalog {
    seed::ats_catalog()
}

pub(super) fn applications() -> Vec<Application> {
    seed::applications()
}

pub(super) fn ids(results: &[Application]) -> Vec<u32> {
    results.iter().map(|application| application.id.0).collect()
}

pub(super) fn search_ids(criteria: &AtsFilterCriteria) -> Vec<u32> {
    ids(&crate::ats::search(&applications(), criteria))
}

pub(super) fn application(catalog: &AtsCatalog, id: u32) -> &Application {
    catalog
        .application(ApplicationId(id))
        .expect("application present")
}

pub(super) fn interview_request() -> InterviewRequest {
    InterviewRequest {
        kind: InterviewType::Final,
        scheduled_date: instant(20, 15),
        duration_minutes: 60,
        interviewer: "Alex Thompson (CTO)".to_string(),
        location: Some("  ".to_string()),
        meeting_link: Some("https://meet.google.com/xyz-final".to_string()),
        notes: None,
    }
}
