use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::source::{CatalogSource, SourceError};
use crate::ats::{
    Application, ApplicationCardView, ApplicationCommand, ApplicationId, AtsFilterCriteria,
    AtsStats, CommandError,
};
use crate::jobs::{CompanyId, CompanyProfileView, Job, JobCardView, JobFilterCriteria, JobId};

/// Service composing a catalog source with the job and applicant query engines.
pub struct BoardService<S> {
    source: Arc<S>,
    today: NaiveDate,
}

impl<S> BoardService<S>
where
    S: CatalogSource + 'static,
{
    /// `today` anchors posted-age labels and the statistics windows.
    pub fn new(source: Arc<S>, today: NaiveDate) -> Self {
        Self { source, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn search_jobs(&self, criteria: &JobFilterCriteria) -> Result<Vec<Job>, BoardServiceError> {
        let catalog = self.source.snapshot()?;
        Ok(catalog.jobs.search(criteria))
    }

    pub fn job(&self, id: JobId) -> Result<Job, BoardServiceError> {
        let catalog = self.source.snapshot()?;
        catalog
            .jobs
            .job(id)
            .cloned()
            .ok_or(BoardServiceError::NotFound {
                kind: "job",
                id: id.0,
            })
    }

    pub fn company_profile(&self, id: CompanyId) -> Result<CompanyProfileView, BoardServiceError> {
        let catalog = self.source.snapshot()?;
        let company = catalog
            .jobs
            .company(id)
            .ok_or(BoardServiceError::NotFound {
                kind: "company",
                id: id.0,
            })?;
        let jobs = catalog.jobs.jobs_for_company(id);
        Ok(CompanyProfileView::new(company, &jobs, self.today))
    }

    pub fn job_cards(
        &self,
        criteria: &JobFilterCriteria,
    ) -> Result<Vec<JobCardView>, BoardServiceError> {
        Ok(self
            .search_jobs(criteria)?
            .iter()
            .map(|job| JobCardView::from_job(job, self.today))
            .collect())
    }

    pub fn search_applications(
        &self,
        criteria: &AtsFilterCriteria,
    ) -> Result<Vec<Application>, BoardServiceError> {
        let catalog = self.source.snapshot()?;
        Ok(catalog.ats.search(criteria))
    }

    pub fn application(&self, id: ApplicationId) -> Result<Application, BoardServiceError> {
        let catalog = self.source.snapshot()?;
        catalog
            .ats
            .application(id)
            .cloned()
            .ok_or(BoardServiceError::NotFound {
                kind: "application",
                id: id.0,
            })
    }

    pub fn application_cards(
        &self,
        criteria: &AtsFilterCriteria,
    ) -> Result<Vec<ApplicationCardView>, BoardServiceError> {
        let catalog = self.source.snapshot()?;
        Ok(catalog
            .ats
            .search(criteria)
            .iter()
            .map(|application| ApplicationCardView::new(application, &catalog.jobs))
            .collect())
    }

    /// Dashboard figures over every application, filters aside.
    pub fn stats(&self) -> Result<AtsStats, BoardServiceError> {
        let catalog = self.source.snapshot()?;
        Ok(AtsStats::compute(catalog.ats.applications(), self.today))
    }

    /// Validate and apply `command` as one atomic update of the source.
    pub fn apply_command(
        &self,
        id: ApplicationId,
        command: ApplicationCommand,
    ) -> Result<Application, BoardServiceError> {
        let not_found = || BoardServiceError::NotFound {
            kind: "application",
            id: id.0,
        };

        let catalog = self.source.update(|current| {
            if current.ats.application(id).is_none() {
                return Err(not_found());
            }
            Ok(current.ats.apply(id, command, self.today)?)
        })?;
        let application = catalog.ats.application(id).cloned().ok_or_else(not_found)?;
        info!(application_id = id.0, status = application.status.as_str(), "application updated");
        Ok(application)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BoardServiceError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u32 },
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::{ApplicationStatus, AtsCatalog, NoteDraft};
    use crate::board::InMemoryCatalogSource;
    use crate::catalog::Catalog;
    use std::sync::Barrier;
    use std::thread;

    struct OfflineSource;

    impl CatalogSource for OfflineSource {
        fn snapshot(&self) -> Result<Arc<Catalog>, SourceError> {
            Err(SourceError::Unavailable("snapshot store offline".into()))
        }

        fn update<F, E>(&self, _change: F) -> Result<Arc<Catalog>, E>
        where
            F: FnOnce(&Catalog) -> Result<AtsCatalog, E>,
            E: From<SourceError>,
        {
            Err(SourceError::Unavailable("snapshot store offline".into()).into())
        }
    }

    /// Holds every updater at a barrier so their commands race for the source.
    struct GatedSource {
        inner: InMemoryCatalogSource,
        gate: Barrier,
    }

    impl CatalogSource for GatedSource {
        fn snapshot(&self) -> Result<Arc<Catalog>, SourceError> {
            self.inner.snapshot()
        }

        fn update<F, E>(&self, change: F) -> Result<Arc<Catalog>, E>
        where
            F: FnOnce(&Catalog) -> Result<AtsCatalog, E>,
            E: From<SourceError>,
        {
            self.gate.wait();
            self.inner.update(change)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 14).expect("valid date")
    }

    fn seeded() -> BoardService<InMemoryCatalogSource> {
        BoardService::new(Arc::new(InMemoryCatalogSource::seed()), today())
    }

    #[test]
    fn missing_ids_surface_as_not_found() {
        let service = seeded();
        assert!(matches!(
            service.job(JobId(42)),
            Err(BoardServiceError::NotFound { kind: "job", id: 42 })
        ));
        assert!(matches!(
            service.company_profile(CompanyId(9)),
            Err(BoardServiceError::NotFound { kind: "company", .. })
        ));
        assert!(matches!(
            service.apply_command(ApplicationId(99), ApplicationCommand::Rate(3)),
            Err(BoardServiceError::NotFound {
                kind: "application",
                id: 99
            })
        ));
    }

    #[test]
    fn source_failures_propagate() {
        let service = BoardService::new(Arc::new(OfflineSource), today());
        let result = service.search_jobs(&JobFilterCriteria::default());
        assert!(matches!(
            result,
            Err(BoardServiceError::Source(SourceError::Unavailable(_)))
        ));
    }

    #[test]
    fn company_profile_lists_its_postings() {
        let profile = seeded().company_profile(CompanyId(2)).expect("profile");
        assert_eq!(profile.company.name, "DataFlow Systems");
        assert_eq!(profile.open_positions, 2);
        let titles: Vec<&str> = profile.jobs.iter().map(|job| job.title.as_str()).collect();
        assert_eq!(titles, vec!["Data Scientist", "Product Manager"]);
    }

    #[test]
    fn applied_commands_are_visible_to_later_reads() {
        let service = seeded();
        let updated = service
            .apply_command(
                ApplicationId(2),
                ApplicationCommand::ChangeStatus(ApplicationStatus::PhoneInterview),
            )
            .expect("screening advances");
        assert_eq!(updated.status, ApplicationStatus::PhoneInterview);
        assert_eq!(updated.last_updated, today());

        let reread = service.application(ApplicationId(2)).expect("present");
        assert_eq!(reread.status, ApplicationStatus::PhoneInterview);
    }

    #[test]
    fn rejected_commands_leave_the_source_untouched() {
        let service = seeded();
        let result = service.apply_command(
            ApplicationId(1),
            ApplicationCommand::AddNote(NoteDraft {
                author: "Tech Lead".into(),
                content: "   ".into(),
                is_internal: true,
            }),
        );
        assert!(matches!(
            result,
            Err(BoardServiceError::Command(CommandError::EmptyNote))
        ));
        assert_eq!(
            service.application(ApplicationId(1)).expect("present").notes.len(),
            2
        );
    }

    #[test]
    fn concurrent_commands_on_different_applications_all_land() {
        let service = BoardService::new(
            Arc::new(GatedSource {
                inner: InMemoryCatalogSource::seed(),
                gate: Barrier::new(2),
            }),
            today(),
        );

        thread::scope(|scope| {
            let first =
                scope.spawn(|| service.apply_command(ApplicationId(2), ApplicationCommand::Rate(5)));
            let second =
                scope.spawn(|| service.apply_command(ApplicationId(4), ApplicationCommand::Rate(5)));
            first.join().expect("thread").expect("first rating applies");
            second.join().expect("thread").expect("second rating applies");
        });

        for id in [ApplicationId(2), ApplicationId(4)] {
            let application = service.application(id).expect("present");
            assert_eq!(application.rating.map(|rating| rating.get()), Some(5));
        }
    }

    #[test]
    fn concurrent_notes_receive_distinct_ids() {
        let service = BoardService::new(
            Arc::new(GatedSource {
                inner: InMemoryCatalogSource::seed(),
                gate: Barrier::new(2),
            }),
            today(),
        );
        let note = |author: &str| {
            ApplicationCommand::AddNote(NoteDraft {
                author: author.into(),
                content: "Strong systems background".into(),
                is_internal: true,
            })
        };

        thread::scope(|scope| {
            let first = scope.spawn(|| service.apply_command(ApplicationId(1), note("Tech Lead")));
            let second = scope.spawn(|| service.apply_command(ApplicationId(1), note("Recruiter")));
            first.join().expect("thread").expect("first note applies");
            second.join().expect("thread").expect("second note applies");
        });

        let notes = service.application(ApplicationId(1)).expect("present").notes;
        assert_eq!(notes.len(), 4);
        assert_ne!(notes[2].id, notes[3].id);
    }
}
