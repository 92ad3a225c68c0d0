use serde::Serialize;
use talent_board::ats::{render_stars, Application, ApplicationCardView, AtsStats};
use talent_board::error::AppError;
use talent_board::jobs::{CompanyProfileView, Job, JobCardView};

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn render_job_cards(cards: &[JobCardView]) {
    if cards.is_empty() {
        println!("No jobs found matching your criteria.");
        return;
    }

    println!("{} job(s) found", cards.len());
    for card in cards {
        let remote = if card.remote_option { " | Remote" } else { "" };
        println!(
            "- [{}] {} at {} ({}){}",
            card.id, card.title, card.company_name, card.location, remote
        );
        println!(
            "    {} | {} | {} | posted {}",
            card.salary_range,
            card.employment_type_label,
            card.experience_level_label,
            card.posted_label
        );
    }
}

pub(crate) fn render_job(job: &Job, posted: &str) {
    println!("{} (job {})", job.title, job.id);
    println!("{} | {}", job.company.name, job.location);
    println!(
        "{} | {} | {}{}",
        job.salary_range,
        job.employment_type.label(),
        job.experience_level.label(),
        if job.remote_option { " | Remote" } else { "" }
    );
    println!("Posted {}", posted);
    if let Some(deadline) = job.application_deadline {
        println!("Apply by {}", deadline);
    }
    println!("\n{}", job.description);
    if !job.requirements.is_empty() {
        println!("\nRequirements");
        for requirement in &job.requirements {
            println!("- {}", requirement);
        }
    }
}

pub(crate) fn render_company(profile: &CompanyProfileView) {
    let company = &profile.company;
    println!("{} (company {})", company.name, company.id);
    println!(
        "{} | {} employees | {}",
        company.industry, company.size, company.location
    );
    if let Some(year) = company.founded_year {
        println!("Founded {}", year);
    }
    if let Some(website) = &company.website {
        println!("{}", website);
    }
    println!("\n{}", company.description);
    println!("\nOpen positions ({})", profile.open_positions);
    render_job_cards(&profile.jobs);
}

pub(crate) fn render_application_cards(cards: &[ApplicationCardView]) {
    if cards.is_empty() {
        println!("No applications found matching your criteria.");
        return;
    }

    println!("{} application(s) found", cards.len());
    for card in cards {
        println!(
            "- [{}] {} <{}> -> {}",
            card.id, card.candidate_name, card.email, card.job_title
        );
        println!(
            "    {} | {} | {} | applied {}",
            card.status_label,
            render_stars(card.rating),
            card.source_label,
            card.applied_date
        );
        if !card.tags.is_empty() {
            println!("    tags: {}", card.tags.join(", "));
        }
        if let Some(next) = &card.next_interview {
            println!(
                "    next: {} with {} at {}",
                next.kind_label,
                next.interviewer,
                next.scheduled_date.format("%Y-%m-%d %H:%M UTC")
            );
        }
    }
}

pub(crate) fn render_application(application: &Application, job_title: &str) {
    let candidate = &application.candidate;
    println!(
        "Application {}: {} for {}",
        application.id,
        candidate.full_name(),
        job_title
    );
    println!(
        "Status {} | Rating {} | Source {} | Applied {} | Updated {}",
        application.status.label(),
        render_stars(application.rating.map(|rating| rating.get())),
        application.source.label(),
        application.applied_date,
        application.last_updated
    );
    println!(
        "{} | {} | {} years experience",
        candidate.email, candidate.location, candidate.experience_years
    );
    if let (Some(position), Some(company)) =
        (&candidate.current_position, &candidate.current_company)
    {
        println!("Currently {} at {}", position, company);
    }
    if !candidate.skills.is_empty() {
        println!("Skills: {}", candidate.skills.join(", "));
    }
    if let Some(average) = application.average_feedback() {
        println!("Average interview rating: {:.1}", average);
    }

    if application.notes.is_empty() {
        println!("\nNotes: none");
    } else {
        println!("\nNotes");
        for note in &application.notes {
            let visibility = if note.is_internal { "internal" } else { "shared" };
            println!(
                "- {} ({}, {}): {}",
                note.author, note.created_date, visibility, note.content
            );
        }
    }

    if application.interviews.is_empty() {
        println!("\nInterviews: none");
    } else {
        println!("\nInterviews");
        for interview in &application.interviews {
            println!(
                "- {} with {} at {} ({} min) [{}]",
                interview.kind.label(),
                interview.interviewer,
                interview.scheduled_date.format("%Y-%m-%d %H:%M UTC"),
                interview.duration_minutes,
                interview.status.label()
            );
            if let Some(feedback) = &interview.feedback {
                println!(
                    "    {} overall | {}: {}",
                    render_stars(Some(feedback.overall_rating.get())),
                    feedback.recommendation.label(),
                    feedback.comments
                );
            }
        }
    }
}

pub(crate) fn render_stats(stats: &AtsStats) {
    println!("Applicant tracking overview");
    println!(
        "- {} total applications | {} this week | {} this month ({}% of total)",
        stats.total_applications,
        stats.applications_this_week,
        stats.applications_this_month,
        stats.month_share_pct
    );
    let rates = &stats.conversion_rates;
    println!(
        "- Conversion: screening -> interview {}% | interview -> offer {}% | offer -> hire {}%",
        rates.screening_to_interview, rates.interview_to_offer, rates.offer_to_hire
    );
    match stats.average_time_to_hire {
        Some(days) => println!("- Average time to hire: {} days", days),
        None => println!("- Average time to hire: no hires yet"),
    }

    println!("\nStatus breakdown");
    for entry in &stats.status_breakdown {
        println!(
            "- {}: {} ({:.1}%)",
            entry.label, entry.count, entry.percentage
        );
    }

    println!("\nTop sources");
    for entry in &stats.top_sources {
        println!(
            "- {}: {} ({:.1}%)",
            entry.label, entry.count, entry.percentage
        );
    }
}
