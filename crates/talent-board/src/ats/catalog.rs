use std::collections::HashSet;

use super::criteria::AtsFilterCriteria;
use super::domain::{Application, ApplicationId};
use super::query;
use crate::catalog::CatalogError;
use crate::jobs::{JobCatalog, JobId};

/// Immutable snapshot of applications with their candidates embedded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtsCatalog {
    applications: Vec<Application>,
}

impl AtsCatalog {
    pub fn new(applications: Vec<Application>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for application in &applications {
            if !seen.insert(application.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "application",
                    id: application.id.0,
                });
            }
        }
        Ok(Self { applications })
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn application(&self, id: ApplicationId) -> Option<&Application> {
        self.applications
            .iter()
            .find(|application| application.id == id)
    }

    pub fn applications_for_job(&self, job_id: JobId) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|application| application.job_id == job_id)
            .collect()
    }

    /// Applications whose `job_id` has no posting in `jobs`.
    pub fn dangling_job_refs(&self, jobs: &JobCatalog) -> Vec<ApplicationId> {
        self.applications
            .iter()
            .filter(|application| jobs.job(application.job_id).is_none())
            .map(|application| application.id)
            .collect()
    }

    pub fn search(&self, criteria: &AtsFilterCriteria) -> Vec<Application> {
        query::search(&self.applications, criteria)
    }

    pub(crate) fn replace(&self, updated: Application) -> Self {
        let applications = self
            .applications
            .iter()
            .map(|application| {
                if application.id == updated.id {
                    updated.clone()
                } else {
                    application.clone()
                }
            })
            .collect();
        Self { applications }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    #[test]
    fn duplicate_application_ids_are_rejected() {
        let mut applications = seed::applications();
        applications[4].id = ApplicationId(1);
        assert!(matches!(
            AtsCatalog::new(applications),
            Err(CatalogError::DuplicateId {
                kind: "application",
                id: 1
            })
        ));
    }

    #[test]
    fn applications_group_by_job() {
        let catalog = seed::ats_catalog();
        let ids: Vec<u32> = catalog
            .applications_for_job(JobId(1))
            .iter()
            .map(|application| application.id.0)
            .collect();
        assert_eq!(ids, vec![1, 5]);
        assert!(catalog.applications_for_job(JobId(5)).is_empty());
        assert!(catalog.dangling_job_refs(&seed::job_catalog()).is_empty());
    }
}
