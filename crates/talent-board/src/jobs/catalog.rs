use std::collections::HashSet;

use tracing::warn;

use super::criteria::JobFilterCriteria;
use super::domain::{Company, CompanyId, Job, JobId};
use super::query;
use crate::catalog::CatalogError;

/// Label shown when an id-based job reference cannot be resolved.
pub const UNKNOWN_POSITION: &str = "Unknown Position";

/// Immutable snapshot of companies and their postings.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    companies: Vec<Company>,
    jobs: Vec<Job>,
}

impl JobCatalog {
    /// Build a catalog, enforcing unique ids and that every posting's company is listed.
    pub fn new(companies: Vec<Company>, jobs: Vec<Job>) -> Result<Self, CatalogError> {
        let mut company_ids = HashSet::new();
        for company in &companies {
            if !company_ids.insert(company.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "company",
                    id: company.id.0,
                });
            }
        }

        let mut job_ids = HashSet::new();
        for job in &jobs {
            if !job_ids.insert(job.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "job",
                    id: job.id.0,
                });
            }
            if !company_ids.contains(&job.company.id) {
                return Err(CatalogError::UnknownCompany {
                    job_id: job.id.0,
                    company_id: job.company.id.0,
                });
            }
        }

        Ok(Self { companies, jobs })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == id)
    }

    /// Postings for one company, in catalog order.
    pub fn jobs_for_company(&self, id: CompanyId) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|job| job.company.id == id)
            .collect()
    }

    pub fn job_title(&self, id: JobId) -> Option<&str> {
        self.job(id).map(|job| job.title.as_str())
    }

    pub fn job_title_or_placeholder(&self, id: JobId) -> &str {
        match self.job_title(id) {
            Some(title) => title,
            None => {
                warn!(job_id = id.0, "job reference did not resolve; using placeholder");
                UNKNOWN_POSITION
            }
        }
    }

    pub fn search(&self, criteria: &JobFilterCriteria) -> Vec<Job> {
        query::search(&self.jobs, criteria)
    }
}
