use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::info;

use crate::ats::AtsCatalog;
use crate::catalog::{Catalog, CatalogError};

/// Where the board reads its catalog snapshot from.
pub trait CatalogSource: Send + Sync {
    fn snapshot(&self) -> Result<Arc<Catalog>, SourceError>;

    /// Derive a new applicant snapshot from the current catalog and swap it in.
    ///
    /// No other update may land between reading the catalog handed to `change` and
    /// storing its result. An `Err` from `change` leaves the source untouched.
    fn update<F, E>(&self, change: F) -> Result<Arc<Catalog>, E>
    where
        Self: Sized,
        F: FnOnce(&Catalog) -> Result<AtsCatalog, E>,
        E: From<SourceError>;
}

/// Error enumeration for catalog source failures.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
    #[error("catalog lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Process-local catalog held behind a lock; nothing is written back to disk.
#[derive(Debug, Default)]
pub struct InMemoryCatalogSource {
    catalog: RwLock<Arc<Catalog>>,
}

impl InMemoryCatalogSource {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn seed() -> Self {
        info!(source = "seed", "using built-in catalog");
        Self::new(Catalog::seed())
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        Ok(Self::new(Catalog::load(path)?))
    }
}

impl CatalogSource for InMemoryCatalogSource {
    fn snapshot(&self) -> Result<Arc<Catalog>, SourceError> {
        let guard = self.catalog.read().map_err(|_| SourceError::Poisoned)?;
        Ok(Arc::clone(&guard))
    }

    fn update<F, E>(&self, change: F) -> Result<Arc<Catalog>, E>
    where
        F: FnOnce(&Catalog) -> Result<AtsCatalog, E>,
        E: From<SourceError>,
    {
        let mut guard = self.catalog.write().map_err(|_| SourceError::Poisoned)?;
        let ats = change(guard.as_ref())?;
        let next = Arc::new(Catalog {
            jobs: guard.jobs.clone(),
            ats,
        });
        *guard = Arc::clone(&next);
        Ok(next)
    }
}
