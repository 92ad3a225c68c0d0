use super::criteria::JobFilterCriteria;
use super::domain::Job;
use crate::search::{self, Criteria, Needle, Predicate};

impl Criteria<Job> for JobFilterCriteria {
    fn compile(&self) -> Predicate<Job> {
        let mut predicate = Predicate::unconstrained();

        if let Some(needle) = Needle::new(&self.query) {
            predicate = predicate.and("query", move |job: &Job| {
                needle.found_in(&job.title)
                    || needle.found_in(&job.company.name)
                    || needle.found_in(&job.description)
            });
        }

        if let Some(needle) = Needle::new(&self.location) {
            predicate = predicate.and("location", move |job: &Job| needle.found_in(&job.location));
        }

        if !self.employment_type.is_any() {
            let filter = self.employment_type.clone();
            predicate = predicate.and("employment_type", move |job: &Job| {
                filter.admits(&job.employment_type)
            });
        }

        if !self.experience_level.is_any() {
            let filter = self.experience_level.clone();
            predicate = predicate.and("experience_level", move |job: &Job| {
                filter.admits(&job.experience_level)
            });
        }

        if self.remote_option {
            predicate = predicate.and("remote_option", |job: &Job| job.remote_option);
        }

        predicate
    }
}

/// Filter `catalog` by `criteria`, returning matches in catalog order.
pub fn search(catalog: &[Job], criteria: &JobFilterCriteria) -> Vec<Job> {
    search::search(catalog, criteria)
}
