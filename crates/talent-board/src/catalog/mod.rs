//! Catalog snapshots: the built-in seed data and JSON documents loaded from disk.

mod loader;
pub mod seed;

use std::path::PathBuf;

use crate::ats::AtsCatalog;
use crate::jobs::JobCatalog;

pub use loader::{CatalogSnapshot, JobRecord};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("job {job_id} references unknown company {company_id}")]
    UnknownCompany { job_id: u32, company_id: u32 },
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Job board and applicant tracking data held together.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub jobs: JobCatalog,
    pub ats: AtsCatalog,
}

impl Catalog {
    pub fn seed() -> Self {
        Self {
            jobs: seed::job_catalog(),
            ats: seed::ats_catalog(),
        }
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        CatalogSnapshot::from_path(path)?.into_catalog()
    }
}
