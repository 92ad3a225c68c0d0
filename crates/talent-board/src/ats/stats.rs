use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::criteria::DateRange;
use super::domain::{Application, ApplicationSource, InterviewStatus};
use super::status::ApplicationStatus;

const WEEK_DAYS: i64 = 7;
const MONTH_DAYS: i64 = 30;

/// Dashboard figures derived from an application list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtsStats {
    pub total_applications: usize,
    pub applications_this_week: usize,
    pub applications_this_month: usize,
    /// Share of all applications received in the last month, whole percent.
    pub month_share_pct: u8,
    pub conversion_rates: ConversionRates,
    /// Mean days from application to hire; `None` until someone is hired.
    pub average_time_to_hire: Option<u32>,
    pub top_sources: Vec<SourceShare>,
    pub status_breakdown: Vec<StatusShare>,
}

/// Stage-to-stage pass rates in whole percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionRates {
    pub screening_to_interview: u8,
    pub interview_to_offer: u8,
    pub offer_to_hire: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceShare {
    pub source: ApplicationSource,
    pub label: &'static str,
    pub count: usize,
    pub percentage: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: ApplicationStatus,
    pub label: &'static str,
    pub count: usize,
    pub percentage: f32,
}

impl AtsStats {
    pub fn compute(applications: &[Application], today: NaiveDate) -> Self {
        let total = applications.len();
        let this_week = received_within(applications, today, WEEK_DAYS);
        let this_month = received_within(applications, today, MONTH_DAYS);

        let status_breakdown = ApplicationStatus::ordered()
            .into_iter()
            .filter_map(|status| {
                let count = applications
                    .iter()
                    .filter(|application| application.status == status)
                    .count();
                (count > 0).then(|| StatusShare {
                    status,
                    label: status.label(),
                    count,
                    percentage: share(count, total),
                })
            })
            .collect();

        let mut top_sources: Vec<SourceShare> = ApplicationSource::ordered()
            .into_iter()
            .filter_map(|source| {
                let count = applications
                    .iter()
                    .filter(|application| application.source == source)
                    .count();
                (count > 0).then(|| SourceShare {
                    source,
                    label: source.label(),
                    count,
                    percentage: share(count, total),
                })
            })
            .collect();
        top_sources.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            total_applications: total,
            applications_this_week: this_week,
            applications_this_month: this_month,
            month_share_pct: whole_percent(this_month, total),
            conversion_rates: conversion_rates(applications),
            average_time_to_hire: average_time_to_hire(applications),
            top_sources,
            status_breakdown,
        }
    }
}

fn received_within(applications: &[Application], today: NaiveDate, days: i64) -> usize {
    let window = DateRange::new(Some(today - Duration::days(days - 1)), Some(today));
    applications
        .iter()
        .filter(|application| window.contains(application.applied_date))
        .count()
}

/// Furthest forward stage an application is known to have reached.
///
/// Exit states carry no stage of their own, so completed interviews stand in for it.
fn reached_stage(application: &Application) -> u8 {
    let from_interviews = application
        .interviews
        .iter()
        .filter(|interview| interview.status == InterviewStatus::Completed)
        .filter_map(|interview| interview.kind.evidences().stage())
        .max()
        .unwrap_or(0);

    application
        .status
        .stage()
        .unwrap_or(0)
        .max(from_interviews)
}

fn conversion_rates(applications: &[Application]) -> ConversionRates {
    let stage_of = |status: ApplicationStatus| status.stage().unwrap_or(u8::MAX);
    let reached: Vec<u8> = applications.iter().map(reached_stage).collect();
    let count_at_least = |status: ApplicationStatus| {
        let floor = stage_of(status);
        reached.iter().filter(|stage| **stage >= floor).count()
    };

    let screened = count_at_least(ApplicationStatus::Screening);
    let interviewed = count_at_least(ApplicationStatus::PhoneInterview);
    let offered = count_at_least(ApplicationStatus::OfferExtended);
    let hired = count_at_least(ApplicationStatus::Hired);

    ConversionRates {
        screening_to_interview: whole_percent(interviewed, screened),
        interview_to_offer: whole_percent(offered, interviewed),
        offer_to_hire: whole_percent(hired, offered),
    }
}

fn average_time_to_hire(applications: &[Application]) -> Option<u32> {
    let durations: Vec<i64> = applications
        .iter()
        .filter(|application| application.status == ApplicationStatus::Hired)
        .map(|application| (application.last_updated - application.applied_date).num_days())
        .collect();

    if durations.is_empty() {
        return None;
    }
    let mean = durations.iter().sum::<i64>() as f64 / durations.len() as f64;
    Some(mean.round().max(0.0) as u32)
}

/// Percentage with one decimal place.
fn share(count: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    ((count as f32 * 1000.0) / total as f32).round() / 10.0
}

fn whole_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 * 100.0) / whole as f64).round().min(100.0) as u8
}
