use talent_board::ats::{
    ApplicationCommand, ApplicationId, ApplicationStatus, AtsFilterCriteria, NoteDraft,
};
use talent_board::error::AppError;
use talent_board::jobs::{ExperienceLevel, JobFilterCriteria};
use talent_board::search::EnumFilter;

use crate::infra::Board;
use crate::render;

pub(crate) fn run_demo(board: &Board) -> Result<(), AppError> {
    println!("Talent board demo (reference date {})", board.today());

    println!("\nJob search: remote only");
    let remote = JobFilterCriteria {
        remote_option: true,
        ..JobFilterCriteria::default()
    };
    render::render_job_cards(&board.job_cards(&remote)?);

    println!("\nJob search: \"devops\"");
    let devops = JobFilterCriteria {
        query: "devops".to_string(),
        ..JobFilterCriteria::default()
    };
    render::render_job_cards(&board.job_cards(&devops)?);

    println!("\nJob search: senior roles in San Francisco");
    let senior_sf = JobFilterCriteria {
        location: "san francisco".to_string(),
        experience_level: EnumFilter::Exactly(ExperienceLevel::Senior),
        ..JobFilterCriteria::default()
    };
    render::render_job_cards(&board.job_cards(&senior_sf)?);

    println!("\nApplicant search: status hired");
    let hired = AtsFilterCriteria {
        status: EnumFilter::Exactly(ApplicationStatus::Hired),
        ..AtsFilterCriteria::default()
    };
    render::render_application_cards(&board.application_cards(&hired)?);

    println!("\nApplicant search: rating 4 and up");
    let strong = AtsFilterCriteria {
        rating_min: 4,
        ..AtsFilterCriteria::default()
    };
    render::render_application_cards(&board.application_cards(&strong)?);

    println!("\nApplicant search: \"chen\"");
    let chen = AtsFilterCriteria {
        search_query: "chen".to_string(),
        ..AtsFilterCriteria::default()
    };
    render::render_application_cards(&board.application_cards(&chen)?);

    println!();
    render::render_stats(&board.stats()?);

    println!("\nPipeline update: accept the offer for application 3");
    match board.apply_command(
        ApplicationId(3),
        ApplicationCommand::ChangeStatus(ApplicationStatus::Hired),
    ) {
        Ok(application) => println!(
            "- {} is now {}",
            application.candidate.full_name(),
            application.status.label()
        ),
        Err(err) => println!("- Update rejected: {}", err),
    }

    match board.apply_command(
        ApplicationId(5),
        ApplicationCommand::AddNote(NoteDraft {
            author: "Hiring Manager".to_string(),
            content: "   ".to_string(),
            is_internal: true,
        }),
    ) {
        Ok(_) => println!("- Blank note unexpectedly accepted"),
        Err(err) => println!("- Blank note rejected: {}", err),
    }

    let stats = board.stats()?;
    println!(
        "- Offer to hire conversion now {}% | average time to hire {}",
        stats.conversion_rates.offer_to_hire,
        stats
            .average_time_to_hire
            .map(|days| format!("{days} days"))
            .unwrap_or_else(|| "n/a".to_string())
    );

    Ok(())
}
