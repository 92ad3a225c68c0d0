use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{Catalog, CatalogError};
use crate::ats::{Application, AtsCatalog};
use crate::jobs::{Company, CompanyId, EmploymentType, ExperienceLevel, Job, JobCatalog, JobId};

/// Normalised catalog document as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// A posting that names its company by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub company_id: CompanyId,
    pub location: String,
    pub salary_range: String,
    pub employment_type: EmploymentType,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub posted_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub remote_option: bool,
    pub experience_level: ExperienceLevel,
}

impl JobRecord {
    fn resolve(self, companies: &[Company]) -> Result<Job, CatalogError> {
        let company = companies
            .iter()
            .find(|company| company.id == self.company_id)
            .cloned()
            .ok_or(CatalogError::UnknownCompany {
                job_id: self.id.0,
                company_id: self.company_id.0,
            })?;

        Ok(Job {
            id: self.id,
            title: self.title,
            company,
            location: self.location,
            salary_range: self.salary_range,
            employment_type: self.employment_type,
            description: self.description,
            requirements: self.requirements,
            posted_date: self.posted_date,
            application_deadline: self.application_deadline,
            remote_option: self.remote_option,
            experience_level: self.experience_level,
        })
    }
}

impl From<&Job> for JobRecord {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company_id: job.company.id,
            location: job.location.clone(),
            salary_range: job.salary_range.clone(),
            employment_type: job.employment_type,
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            posted_date: job.posted_date,
            application_deadline: job.application_deadline,
            remote_option: job.remote_option,
            experience_level: job.experience_level,
        }
    }
}

impl CatalogSnapshot {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
        let snapshot = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            companies = snapshot.companies.len(),
            jobs = snapshot.jobs.len(),
            applications = snapshot.applications.len(),
            "catalog snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Normalise an in-memory catalog back into document form.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            companies: catalog.jobs.companies().to_vec(),
            jobs: catalog.jobs.jobs().iter().map(JobRecord::from).collect(),
            applications: catalog.ats.applications().to_vec(),
        }
    }

    /// Resolve company references and validate ids.
    ///
    /// Applications pointing at unknown jobs are kept and reported at `warn`.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let jobs = self
            .jobs
            .into_iter()
            .map(|record| record.resolve(&self.companies))
            .collect::<Result<Vec<_>, _>>()?;
        let jobs = JobCatalog::new(self.companies, jobs)?;
        let ats = AtsCatalog::new(self.applications)?;

        for id in ats.dangling_job_refs(&jobs) {
            warn!(application_id = id.0, "application references a job missing from the catalog");
        }

        Ok(Catalog { jobs, ats })
    }
}
