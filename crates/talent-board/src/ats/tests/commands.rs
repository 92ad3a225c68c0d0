use super::common::*;
use crate::ats::{
    ApplicationCommand, ApplicationId, ApplicationStatus, AtsCatalog, CommandError,
    InterviewStatus, NoteDraft, RatingError, TransitionError,
};

fn note(content: &str) -> ApplicationCommand {
    ApplicationCommand::AddNote(NoteDraft {
        author: "Hiring Manager".to_string(),
        content: content.to_string(),
        is_internal: true,
    })
}

#[test]
fn adding_a_note_produces_a_new_snapshot() {
    let catalog = catalog();
    let updated = catalog
        .apply(ApplicationId(4), note("  Promising portfolio  "), today())
        .expect("note accepted");

    let before = application(&catalog, 4);
    let after = application(&updated, 4);
    assert!(before.notes.is_empty());
    assert_eq!(after.notes.len(), 1);
    assert_eq!(after.notes[0].id, 6);
    assert_eq!(after.notes[0].content, "Promising portfolio");
    assert_eq!(after.notes[0].created_date, today());
    assert_eq!(after.last_updated, today());
    assert_eq!(application(&updated, 1), application(&catalog, 1));
}

#[test]
fn blank_notes_and_authors_are_rejected() {
    let catalog = catalog();
    assert_eq!(
        catalog.apply(ApplicationId(2), note("   "), today()),
        Err(CommandError::EmptyNote)
    );

    let anonymous = ApplicationCommand::AddNote(NoteDraft {
        author: " ".to_string(),
        content: "Follow up next week".to_string(),
        is_internal: false,
    });
    assert_eq!(
        catalog.apply(ApplicationId(2), anonymous, today()),
        Err(CommandError::MissingAuthor)
    );
}

#[test]
fn scheduling_assigns_the_next_interview_id() {
    let catalog = catalog();
    let updated = catalog
        .apply(
            ApplicationId(1),
            ApplicationCommand::ScheduleInterview(interview_request()),
            today(),
        )
        .expect("interview booked");

    let interviews = &application(&updated, 1).interviews;
    assert_eq!(interviews.len(), 3);
    let booked = &interviews[2];
    assert_eq!(booked.id, 7);
    assert_eq!(booked.status, InterviewStatus::Scheduled);
    assert_eq!(booked.location, None);
    assert!(booked.feedback.is_none());

    let next = application(&updated, 1)
        .next_scheduled_interview()
        .expect("upcoming interview");
    assert_eq!(next.id, 2);
}

#[test]
fn exhausted_id_space_is_reported_instead_of_wrapping() {
    let mut loaded = applications();
    loaded[0].notes[0].id = u32::MAX;
    loaded[0].interviews[0].id = u32::MAX;
    let catalog = AtsCatalog::new(loaded).expect("ids are unique");

    assert_eq!(
        catalog.apply(ApplicationId(2), note("Follow up next week"), today()),
        Err(CommandError::IdSpaceExhausted { kind: "note" })
    );
    assert_eq!(
        catalog.apply(
            ApplicationId(2),
            ApplicationCommand::ScheduleInterview(interview_request()),
            today()
        ),
        Err(CommandError::IdSpaceExhausted { kind: "interview" })
    );
    assert_eq!(
        catalog.apply(ApplicationId(2), ApplicationCommand::Rate(4), today()).map(|_| ()),
        Ok(())
    );
}

#[test]
fn scheduling_validates_the_request() {
    let catalog = catalog();

    let mut zero_length = interview_request();
    zero_length.duration_minutes = 0;
    assert!(matches!(
        catalog.apply(
            ApplicationId(1),
            ApplicationCommand::ScheduleInterview(zero_length),
            today()
        ),
        Err(CommandError::InvalidInterview { .. })
    ));

    let mut nobody = interview_request();
    nobody.interviewer = "   ".to_string();
    assert!(matches!(
        catalog.apply(
            ApplicationId(1),
            ApplicationCommand::ScheduleInterview(nobody),
            today()
        ),
        Err(CommandError::InvalidInterview { .. })
    ));
}

#[test]
fn closed_applications_do_not_take_interviews() {
    let result = catalog().apply(
        ApplicationId(5),
        ApplicationCommand::ScheduleInterview(interview_request()),
        today(),
    );
    assert_eq!(
        result,
        Err(CommandError::ClosedApplication {
            id: ApplicationId(5),
            status: ApplicationStatus::Rejected,
        })
    );
}

#[test]
fn status_changes_follow_the_pipeline() {
    let catalog = catalog();

    let hired = catalog
        .apply(
            ApplicationId(3),
            ApplicationCommand::ChangeStatus(ApplicationStatus::Hired),
            today(),
        )
        .expect("offer accepted");
    assert_eq!(application(&hired, 3).status, ApplicationStatus::Hired);

    assert_eq!(
        catalog.apply(
            ApplicationId(1),
            ApplicationCommand::ChangeStatus(ApplicationStatus::Screening),
            today()
        ),
        Err(CommandError::Transition(TransitionError::NotForward {
            from: ApplicationStatus::TechnicalInterview,
            to: ApplicationStatus::Screening,
        }))
    );

    assert_eq!(
        catalog.apply(
            ApplicationId(5),
            ApplicationCommand::ChangeStatus(ApplicationStatus::Screening),
            today()
        ),
        Err(CommandError::Transition(TransitionError::FromTerminal {
            from: ApplicationStatus::Rejected,
        }))
    );
}

#[test]
fn ratings_are_bounded() {
    let catalog = catalog();
    let rated = catalog
        .apply(ApplicationId(2), ApplicationCommand::Rate(5), today())
        .expect("rating accepted");
    assert_eq!(application(&rated, 2).rating.map(|rating| rating.get()), Some(5));

    assert_eq!(
        catalog.apply(ApplicationId(2), ApplicationCommand::Rate(0), today()),
        Err(CommandError::Rating(RatingError { value: 0 }))
    );
}

#[test]
fn unknown_applications_are_reported() {
    assert_eq!(
        catalog().apply(ApplicationId(77), ApplicationCommand::Rate(3), today()),
        Err(CommandError::ApplicationNotFound(ApplicationId(77)))
    );
}
