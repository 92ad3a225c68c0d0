use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raised when text does not name a member of a closed value set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Criteria slot for an enumerated record field.
///
/// Empty text is the wildcard. Text that names no member of the set is kept as
/// `Unrecognized` so it filters everything out instead of silently widening the
/// result to the wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnumFilter<T> {
    Any,
    Exactly(T),
    Unrecognized(String),
}

impl<T> Default for EnumFilter<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T: FromStr> EnumFilter<T> {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Any;
        }
        match raw.parse::<T>() {
            Ok(value) => Self::Exactly(value),
            Err(_) => Self::Unrecognized(raw.to_string()),
        }
    }
}

impl<T: PartialEq> EnumFilter<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => expected == value,
            Self::Unrecognized(_) => false,
        }
    }
}

impl<T> EnumFilter<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl<T> From<T> for EnumFilter<T> {
    fn from(value: T) -> Self {
        Self::Exactly(value)
    }
}

impl<T> From<Option<T>> for EnumFilter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Any, Self::Exactly)
    }
}

impl<T: fmt::Display> fmt::Display for EnumFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => Ok(()),
            Self::Exactly(value) => write!(f, "{value}"),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl<T: fmt::Display> Serialize for EnumFilter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: FromStr> Deserialize<'de> for EnumFilter<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Lower-cased search text, compiled once per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    /// `None` for the empty string, which is the wildcard.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_lowercase()))
        }
    }

    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Shade {
        Light,
        Dark,
    }

    impl FromStr for Shade {
        type Err = ParseEnumError;

        fn from_str(raw: &str) -> Result<Self, Self::Err> {
            match raw {
                "light" => Ok(Self::Light),
                "dark" => Ok(Self::Dark),
                other => Err(ParseEnumError::new("shade", other)),
            }
        }
    }

    #[test]
    fn empty_text_is_wildcard() {
        let filter = EnumFilter::<Shade>::parse("");
        assert!(filter.is_any());
        assert!(filter.admits(&Shade::Light));
        assert!(filter.admits(&Shade::Dark));
    }

    #[test]
    fn unknown_text_admits_nothing() {
        let filter = EnumFilter::<Shade>::parse("Light");
        assert_eq!(filter, EnumFilter::Unrecognized("Light".to_string()));
        assert!(!filter.admits(&Shade::Light));
        assert!(!filter.admits(&Shade::Dark));
    }

    #[test]
    fn optional_values_convert_to_filters() {
        assert_eq!(
            EnumFilter::<Shade>::from(Some(Shade::Dark)),
            EnumFilter::Exactly(Shade::Dark)
        );
        assert!(EnumFilter::<Shade>::from(None).is_any());
    }

    #[test]
    fn needle_matches_case_insensitively() {
        let needle = Needle::new("REACT").expect("non-empty needle");
        assert!(needle.found_in("React Developer"));
        assert!(Needle::new("react")
            .expect("non-empty needle")
            .found_in("React Developer"));
        assert!(Needle::new("").is_none());
    }
}
