use tracing::debug;

use super::predicate::Predicate;

/// Sparse filter criteria that can be compiled into a record predicate.
pub trait Criteria<T> {
    fn compile(&self) -> Predicate<T>;
}

/// Borrow the records accepted by `predicate`, in catalog order.
pub fn select<'a, T>(catalog: &'a [T], predicate: &Predicate<T>) -> Vec<&'a T> {
    catalog
        .iter()
        .filter(|record| predicate.matches(record))
        .collect()
}

/// Copy the records accepted by `predicate` into a new list, in catalog order.
pub fn execute<T: Clone>(catalog: &[T], predicate: &Predicate<T>) -> Vec<T> {
    select(catalog, predicate).into_iter().cloned().collect()
}

/// Compile `criteria` and run it over `catalog`. The catalog is never modified.
pub fn search<T, C>(catalog: &[T], criteria: &C) -> Vec<T>
where
    T: Clone,
    C: Criteria<T> + ?Sized,
{
    let predicate = criteria.compile();
    let results = execute(catalog, &predicate);
    debug!(
        clauses = ?predicate.clause_names(),
        matched = results.len(),
        total = catalog.len(),
        "catalog query executed"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AtLeast(u32);

    impl Criteria<u32> for AtLeast {
        fn compile(&self) -> Predicate<u32> {
            let floor = self.0;
            Predicate::unconstrained().and("at_least", move |value| *value >= floor)
        }
    }

    #[test]
    fn search_preserves_catalog_order_and_leaves_input_untouched() {
        let catalog: Vec<u32> = vec![7, 1, 9, 3, 8];
        let results = search(&catalog, &AtLeast(5));
        assert_eq!(results, vec![7, 9, 8]);
        assert_eq!(catalog, vec![7, 1, 9, 3, 8]);
    }

    #[test]
    fn select_borrows_from_catalog() {
        let catalog: Vec<u32> = vec![2, 4, 6];
        let predicate = AtLeast(4).compile();
        let selected = select(&catalog, &predicate);
        assert_eq!(selected, vec![&4, &6]);
    }
}
