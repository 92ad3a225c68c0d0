use std::fmt;

type Test<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

struct Clause<T> {
    name: &'static str,
    test: Test<T>,
}

/// Conjunction of named boolean tests over one record.
///
/// A predicate with no clauses matches every record.
pub struct Predicate<T> {
    clauses: Vec<Clause<T>>,
}

impl<T> Predicate<T> {
    pub fn unconstrained() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    pub fn and<F>(mut self, name: &'static str, test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.clauses.push(Clause {
            name,
            test: Box::new(test),
        });
        self
    }

    pub fn matches(&self, record: &T) -> bool {
        self.clauses.iter().all(|clause| (clause.test)(record))
    }

    pub fn clause_names(&self) -> Vec<&'static str> {
        self.clauses.iter().map(|clause| clause.name).collect()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl<T> Default for Predicate<T> {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("clauses", &self.clause_names())
            .finish()
    }
}
