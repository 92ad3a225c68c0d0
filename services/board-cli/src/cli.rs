use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use talent_board::ats::{
    export, ApplicationCommand, ApplicationId, ApplicationStatus, AtsFilterCriteria, DateRange,
    InterviewRequest, InterviewType, NoteDraft,
};
use talent_board::board::BoardServiceError;
use talent_board::error::AppError;
use talent_board::jobs::{posted_label, CompanyId, JobFilterCriteria, JobId, UNKNOWN_POSITION};
use talent_board::search::EnumFilter;

use crate::demo::run_demo;
use crate::infra::{self, Board};
use crate::render;

#[derive(Parser, Debug)]
#[command(
    name = "talent-board",
    about = "Search job postings and track applicants from the command line",
    version
)]
struct Cli {
    /// JSON catalog snapshot to load instead of the built-in demo data
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Reference date for posting ages and statistics (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true, value_parser = crate::infra::parse_date)]
    today: Option<NaiveDate>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse job postings
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Inspect hiring companies
    Companies {
        #[command(subcommand)]
        command: CompaniesCommand,
    },
    /// Review and update applications
    Ats {
        #[command(subcommand)]
        command: AtsCommand,
    },
    /// Walk through sample searches against the built-in catalog (default command)
    Demo,
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// Filter postings by keyword, location, type, level and remote availability
    Search(JobSearchArgs),
    /// Show a single posting
    Show(ShowArgs),
}

#[derive(Subcommand, Debug)]
enum CompaniesCommand {
    /// Show a company profile with its postings
    Show(ShowArgs),
}

#[derive(Subcommand, Debug)]
enum AtsCommand {
    /// Filter applications
    Search(AtsSearchArgs),
    /// Show one application with its notes and interviews
    Show(ShowArgs),
    /// Dashboard statistics over every application
    Stats(JsonFlag),
    /// Write filtered applications as CSV
    Export(ExportArgs),
    /// Add a reviewer note
    Note(NoteArgs),
    /// Book an interview
    Schedule(ScheduleArgs),
    /// Move an application along the hiring pipeline
    Status(StatusArgs),
    /// Set the star rating
    Rate(RateArgs),
}

#[derive(Args, Debug, Default)]
struct JsonFlag {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ShowArgs {
    id: u32,
    #[command(flatten)]
    output: JsonFlag,
}

#[derive(Args, Debug, Default)]
struct JobSearchArgs {
    /// Matched against title, company name and description
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long, default_value = "")]
    location: String,
    /// full-time, part-time, contract or freelance
    #[arg(long, default_value = "")]
    employment_type: String,
    /// entry, mid, senior or executive
    #[arg(long, default_value = "")]
    experience_level: String,
    /// Only postings that allow remote work
    #[arg(long)]
    remote: bool,
    #[command(flatten)]
    output: JsonFlag,
}

impl JobSearchArgs {
    fn criteria(&self) -> JobFilterCriteria {
        JobFilterCriteria {
            query: self.query.clone(),
            location: self.location.clone(),
            employment_type: EnumFilter::parse(&self.employment_type),
            experience_level: EnumFilter::parse(&self.experience_level),
            remote_option: self.remote,
        }
    }
}

#[derive(Args, Debug, Default)]
struct AtsFilterArgs {
    /// Pipeline status such as screening or offer_extended
    #[arg(long, default_value = "")]
    status: String,
    #[arg(long)]
    job_id: Option<u32>,
    /// Minimum star rating (0 keeps unrated applications)
    #[arg(long, default_value_t = 0)]
    rating_min: u8,
    /// direct, linkedin, indeed, glassdoor, referral or company_website
    #[arg(long, default_value = "")]
    source: String,
    /// Matched against candidate first name, last name and email
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, value_parser = crate::infra::parse_date)]
    applied_from: Option<NaiveDate>,
    #[arg(long, value_parser = crate::infra::parse_date)]
    applied_to: Option<NaiveDate>,
}

impl AtsFilterArgs {
    fn criteria(&self) -> AtsFilterCriteria {
        AtsFilterCriteria {
            status: EnumFilter::parse(&self.status),
            job_id: self.job_id.map(JobId),
            date_range: DateRange::new(self.applied_from, self.applied_to),
            rating_min: self.rating_min,
            source: EnumFilter::parse(&self.source),
            search_query: self.search.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
struct AtsSearchArgs {
    #[command(flatten)]
    filters: AtsFilterArgs,
    #[command(flatten)]
    output: JsonFlag,
}

#[derive(Args, Debug, Default)]
struct ExportArgs {
    #[command(flatten)]
    filters: AtsFilterArgs,
    /// Destination file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct NoteArgs {
    id: u32,
    #[arg(long)]
    author: String,
    #[arg(long)]
    content: String,
    /// Share the note with the candidate-facing record
    #[arg(long)]
    public: bool,
    #[command(flatten)]
    output: JsonFlag,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    id: u32,
    /// phone_screening, video_call, technical, behavioral, final or onsite
    #[arg(long)]
    kind: InterviewType,
    /// RFC 3339 start time, e.g. 2025-01-20T15:00:00Z
    #[arg(long)]
    at: DateTime<Utc>,
    /// Length in minutes
    #[arg(long, default_value_t = 60)]
    duration: u32,
    #[arg(long)]
    interviewer: String,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    meeting_link: Option<String>,
    #[arg(long)]
    notes: Option<String>,
    #[command(flatten)]
    output: JsonFlag,
}

#[derive(Args, Debug)]
struct StatusArgs {
    id: u32,
    status: ApplicationStatus,
    #[command(flatten)]
    output: JsonFlag,
}

#[derive(Args, Debug)]
struct RateArgs {
    id: u32,
    stars: u8,
    #[command(flatten)]
    output: JsonFlag,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = infra::init()?;

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&infra::seed_board(cli.today)),
        Command::Jobs { command } => {
            let board = infra::open_board(&config, cli.catalog, cli.today)?;
            run_jobs(&board, command)
        }
        Command::Companies {
            command: CompaniesCommand::Show(args),
        } => {
            let board = infra::open_board(&config, cli.catalog, cli.today)?;
            let profile = board.company_profile(CompanyId(args.id))?;
            if args.output.json {
                render::print_json(&profile)
            } else {
                render::render_company(&profile);
                Ok(())
            }
        }
        Command::Ats { command } => {
            let board = infra::open_board(&config, cli.catalog, cli.today)?;
            run_ats(&board, command)
        }
    }
}

fn run_jobs(board: &Board, command: JobsCommand) -> Result<(), AppError> {
    match command {
        JobsCommand::Search(args) => {
            let cards = board.job_cards(&args.criteria())?;
            if args.output.json {
                render::print_json(&cards)
            } else {
                render::render_job_cards(&cards);
                Ok(())
            }
        }
        JobsCommand::Show(args) => {
            let job = board.job(JobId(args.id))?;
            if args.output.json {
                render::print_json(&job)
            } else {
                render::render_job(&job, &posted_label(job.posted_date, board.today()));
                Ok(())
            }
        }
    }
}

fn run_ats(board: &Board, command: AtsCommand) -> Result<(), AppError> {
    match command {
        AtsCommand::Search(args) => {
            let cards = board.application_cards(&args.filters.criteria())?;
            if args.output.json {
                render::print_json(&cards)
            } else {
                render::render_application_cards(&cards);
                Ok(())
            }
        }
        AtsCommand::Show(args) => {
            let application = board.application(ApplicationId(args.id))?;
            show_application(board, &application, args.output.json)
        }
        AtsCommand::Stats(output) => {
            let stats = board.stats()?;
            if output.json {
                render::print_json(&stats)
            } else {
                render::render_stats(&stats);
                Ok(())
            }
        }
        AtsCommand::Export(args) => {
            let cards = board.application_cards(&args.filters.criteria())?;
            match args.output {
                Some(path) => {
                    let file = File::create(&path)?;
                    export::write_csv(BufWriter::new(file), &cards)?;
                    eprintln!("Exported {} application(s) to {}", cards.len(), path.display());
                }
                None => export::write_csv(io::stdout().lock(), &cards)?,
            }
            Ok(())
        }
        AtsCommand::Note(args) => {
            let command = ApplicationCommand::AddNote(NoteDraft {
                author: args.author,
                content: args.content,
                is_internal: !args.public,
            });
            apply_and_show(board, args.id, command, args.output.json)
        }
        AtsCommand::Schedule(args) => {
            let command = ApplicationCommand::ScheduleInterview(InterviewRequest {
                kind: args.kind,
                scheduled_date: args.at,
                duration_minutes: args.duration,
                interviewer: args.interviewer,
                location: args.location,
                meeting_link: args.meeting_link,
                notes: args.notes,
            });
            apply_and_show(board, args.id, command, args.output.json)
        }
        AtsCommand::Status(args) => apply_and_show(
            board,
            args.id,
            ApplicationCommand::ChangeStatus(args.status),
            args.output.json,
        ),
        AtsCommand::Rate(args) => apply_and_show(
            board,
            args.id,
            ApplicationCommand::Rate(args.stars),
            args.output.json,
        ),
    }
}

fn apply_and_show(
    board: &Board,
    id: u32,
    command: ApplicationCommand,
    json: bool,
) -> Result<(), AppError> {
    let application = board.apply_command(ApplicationId(id), command)?;
    show_application(board, &application, json)?;
    eprintln!("{UNSAVED_CHANGES}");
    Ok(())
}

const UNSAVED_CHANGES: &str =
    "Note: changes apply to this run only and are not written back to the catalog.";

fn show_application(
    board: &Board,
    application: &talent_board::ats::Application,
    json: bool,
) -> Result<(), AppError> {
    if json {
        return render::print_json(application);
    }

    let job_title = match board.job(application.job_id) {
        Ok(job) => job.title,
        Err(BoardServiceError::NotFound { .. }) => UNKNOWN_POSITION.to_string(),
        Err(err) => return Err(err.into()),
    };
    render::render_application(application, &job_title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn edits_apply_to_the_running_board() {
        let board = crate::infra::seed_board(None);
        apply_and_show(&board, 4, ApplicationCommand::Rate(5), true).expect("rating applies");
        let rated = board.application(ApplicationId(4)).expect("present");
        assert_eq!(rated.rating.map(|rating| rating.get()), Some(5));
    }

    #[test]
    fn command_line_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ats_flags_become_criteria() {
        let cli = Cli::try_parse_from([
            "talent-board",
            "ats",
            "search",
            "--status",
            "screening",
            "--rating-min",
            "3",
            "--applied-from",
            "2025-01-01",
        ])
        .expect("flags parse");

        let Some(Command::Ats {
            command: AtsCommand::Search(args),
        }) = cli.command
        else {
            panic!("expected ats search");
        };
        let criteria = args.filters.criteria();
        assert_eq!(
            criteria.status,
            EnumFilter::Exactly(ApplicationStatus::Screening)
        );
        assert_eq!(criteria.rating_min, 3);
        assert!(!criteria.date_range.is_open());
        assert!(criteria.source.is_any());
    }

    #[test]
    fn job_flags_default_to_wildcards() {
        let cli = Cli::try_parse_from(["talent-board", "jobs", "search"]).expect("flags parse");
        let Some(Command::Jobs {
            command: JobsCommand::Search(args),
        }) = cli.command
        else {
            panic!("expected jobs search");
        };
        assert!(args.criteria().is_unconstrained());
    }

    #[test]
    fn status_argument_rejects_unknown_states() {
        let result = Cli::try_parse_from(["talent-board", "ats", "status", "2", "interviewing"]);
        assert!(result.is_err());
    }
}
