use tracing::warn;

use super::criteria::AtsFilterCriteria;
use super::domain::Application;
use crate::search::{self, Criteria, Needle, Predicate};

impl Criteria<Application> for AtsFilterCriteria {
    fn compile(&self) -> Predicate<Application> {
        let mut predicate = Predicate::unconstrained();

        if !self.status.is_any() {
            let filter = self.status.clone();
            predicate = predicate.and("status", move |application: &Application| {
                filter.admits(&application.status)
            });
        }

        if let Some(job_id) = self.job_id {
            predicate = predicate.and("job_id", move |application: &Application| {
                application.job_id == job_id
            });
        }

        if self.rating_min > 0 {
            let floor = self.rating_min;
            predicate = predicate.and("rating_min", move |application: &Application| {
                application
                    .rating
                    .map_or(false, |rating| rating.get() >= floor)
            });
        }

        if !self.source.is_any() {
            let filter = self.source.clone();
            predicate = predicate.and("source", move |application: &Application| {
                filter.admits(&application.source)
            });
        }

        if let Some(needle) = Needle::new(&self.search_query) {
            predicate = predicate.and("search_query", move |application: &Application| {
                let candidate = &application.candidate;
                needle.found_in(&candidate.first_name)
                    || needle.found_in(&candidate.last_name)
                    || needle.found_in(&candidate.email)
            });
        }

        if !self.date_range.is_open() {
            warn!(
                start = ?self.date_range.start,
                end = ?self.date_range.end,
                "date_range is not applied to application search"
            );
        }

        predicate
    }
}

/// Filter `catalog` by `criteria`, returning matches in catalog order.
pub fn search(catalog: &[Application], criteria: &AtsFilterCriteria) -> Vec<Application> {
    search::search(catalog, criteria)
}
