//! Integration scenarios for applicant tracking search, commands and reporting.

use chrono::NaiveDate;

use talent_board::ats::{
    self, export, ApplicationCardView, ApplicationCommand, ApplicationId, ApplicationStatus,
    AtsFilterCriteria, AtsStats,
};
use talent_board::catalog::{seed, Catalog};
use talent_board::jobs::JobId;
use talent_board::search::EnumFilter;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 14).expect("valid date")
}

fn ids(criteria: &AtsFilterCriteria) -> Vec<u32> {
    ats::search(&seed::applications(), criteria)
        .iter()
        .map(|application| application.id.0)
        .collect()
}

#[test]
fn hired_filter_is_empty_on_the_seed_pipeline() {
    let criteria = AtsFilterCriteria {
        status: EnumFilter::Exactly(ApplicationStatus::Hired),
        ..AtsFilterCriteria::default()
    };
    assert!(ids(&criteria).is_empty());
}

#[test]
fn rating_and_name_filters() {
    let strong = AtsFilterCriteria {
        rating_min: 4,
        ..AtsFilterCriteria::default()
    };
    assert_eq!(ids(&strong), vec![1, 3]);

    let chen = AtsFilterCriteria {
        search_query: "chen".to_string(),
        ..AtsFilterCriteria::default()
    };
    assert_eq!(ids(&chen), vec![2]);
}

#[test]
fn cards_fall_back_to_placeholder_titles() {
    let catalog = Catalog::seed();
    let mut application = seed::applications().remove(1);
    application.job_id = JobId(404);

    let card = ApplicationCardView::new(&application, &catalog.jobs);
    assert_eq!(card.job_title, "Unknown Position");
    assert_eq!(card.candidate_name, "Michael Chen");
    assert_eq!(card.status_label, "Screening");
}

#[test]
fn cards_surface_the_next_scheduled_interview() {
    let catalog = Catalog::seed();
    let application = catalog
        .ats
        .application(ApplicationId(1))
        .expect("present");

    let card = ApplicationCardView::new(application, &catalog.jobs);
    assert_eq!(card.job_title, "Senior Frontend Developer");
    assert_eq!(card.note_count, 2);
    assert_eq!(card.interview_count, 2);
    let next = card.next_interview.expect("technical round booked");
    assert_eq!(next.kind_label, "Technical Interview");
    assert_eq!(next.interviewer, "John Doe (Tech Lead)");
}

#[test]
fn csv_export_writes_one_row_per_card() {
    let catalog = Catalog::seed();
    let criteria = AtsFilterCriteria {
        rating_min: 4,
        ..AtsFilterCriteria::default()
    };
    let cards: Vec<ApplicationCardView> = catalog
        .ats
        .search(&criteria)
        .iter()
        .map(|application| ApplicationCardView::new(application, &catalog.jobs))
        .collect();

    let mut buffer = Vec::new();
    export::write_csv(&mut buffer, &cards).expect("csv written");
    let text = String::from_utf8(buffer).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "id,candidate,email,job_title,status,rating,source,applied_date,tags"
    );
    assert_eq!(
        lines[1],
        "1,Sarah Johnson,sarah.johnson@email.com,Senior Frontend Developer,technical_interview,4,linkedin,2025-01-08,strong-candidate;react-expert"
    );
    assert_eq!(lines.len(), 3);
}

#[test]
fn commands_and_stats_compose() {
    let catalog = seed::ats_catalog();
    let advanced = catalog
        .apply(
            ApplicationId(3),
            ApplicationCommand::ChangeStatus(ApplicationStatus::Hired),
            today(),
        )
        .expect("offer accepted");

    let before = AtsStats::compute(catalog.applications(), today());
    let after = AtsStats::compute(advanced.applications(), today());

    assert_eq!(before.average_time_to_hire, None);
    assert_eq!(after.average_time_to_hire, Some(9));
    assert_eq!(after.conversion_rates.offer_to_hire, 100);
}
