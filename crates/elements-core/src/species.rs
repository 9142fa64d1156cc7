//! Normalizes heterogeneous species identifiers to a plain atomic number.

use crate::common::constants::{is_tabulated_atomic_number, truncated_atomic_number};
use crate::domain::{ElementQuery, ElementRecord, SpeciesError, SpeciesResult};
use crate::element::Element;
use crate::table::element_table;

/// Anything carrying an atomic-number-like attribute, such as a crystal site.
pub trait AtomicNumbered {
    fn atomic_number(&self) -> Option<i64>;
}

impl AtomicNumbered for ElementRecord {
    fn atomic_number(&self) -> Option<i64> {
        Some(i64::from(ElementRecord::atomic_number(self)))
    }
}

impl AtomicNumbered for Element {
    fn atomic_number(&self) -> Option<i64> {
        Element::atomic_number(self).map(i64::from)
    }
}

#[derive(Clone, Copy)]
pub enum Species<'a> {
    AtomicNumber(i64),
    /// Truncated toward zero after the range check.
    Fractional(f64),
    /// Symbol, full name, or integer text.
    Text(&'a str),
    Element(&'a Element),
    Numbered(&'a dyn AtomicNumbered),
}

impl std::fmt::Debug for Species<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomicNumber(value) => f.debug_tuple("AtomicNumber").field(value).finish(),
            Self::Fractional(value) => f.debug_tuple("Fractional").field(value).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Element(element) => f.debug_tuple("Element").field(element).finish(),
            Self::Numbered(numbered) => f
                .debug_tuple("Numbered")
                .field(&numbered.atomic_number())
                .finish(),
        }
    }
}

impl From<i64> for Species<'_> {
    fn from(value: i64) -> Self {
        Self::AtomicNumber(value)
    }
}

impl From<i32> for Species<'_> {
    fn from(value: i32) -> Self {
        Self::AtomicNumber(i64::from(value))
    }
}

impl From<u8> for Species<'_> {
    fn from(value: u8) -> Self {
        Self::AtomicNumber(i64::from(value))
    }
}

impl From<f64> for Species<'_> {
    fn from(value: f64) -> Self {
        Self::Fractional(value)
    }
}

impl<'a> From<&'a str> for Species<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a Element> for Species<'a> {
    fn from(value: &'a Element) -> Self {
        Self::Element(value)
    }
}

/// Atomic number for `species`.
///
/// Failures are logged at `warn` and returned; callers treat `Err` as
/// "no atomic number available".
pub fn number_from_species<'a>(species: impl Into<Species<'a>>) -> SpeciesResult<u8> {
    let species = species.into();
    let outcome = resolve_species(species);
    if let Err(error) = &outcome {
        tracing::warn!(?species, %error, "rejected species");
    }
    outcome
}

fn resolve_species(species: Species<'_>) -> SpeciesResult<u8> {
    match species {
        Species::AtomicNumber(value) => checked_atomic_number(value),
        Species::Fractional(value) => truncated_atomic_number(value)
            .ok_or(SpeciesError::OutOfRange { value })
            .and_then(checked_atomic_number),
        Species::Text(text) => element_table()
            .resolve(&ElementQuery::parse(text))
            .map(ElementRecord::atomic_number)
            .ok_or_else(|| SpeciesError::UnknownLabel {
                label: text.to_owned(),
            }),
        Species::Element(element) => {
            element
                .atomic_number()
                .ok_or_else(|| SpeciesError::UnresolvedElement {
                    input: element.input().to_string(),
                })
        }
        Species::Numbered(numbered) => {
            let value = numbered
                .atomic_number()
                .ok_or_else(|| SpeciesError::InvalidSpecies {
                    reason: "value exposes no atomic number".to_string(),
                })?;
            element_table()
                .by_atomic_number(value)
                .map(ElementRecord::atomic_number)
                .ok_or_else(|| SpeciesError::InvalidSpecies {
                    reason: format!("atomic number {value} is not tabulated"),
                })
        }
    }
}

fn checked_atomic_number(value: i64) -> SpeciesResult<u8> {
    if !is_tabulated_atomic_number(value) {
        return Err(SpeciesError::OutOfRange {
            value: value as f64,
        });
    }
    element_table()
        .by_atomic_number(value)
        .map(ElementRecord::atomic_number)
        .ok_or(SpeciesError::OutOfRange {
            value: value as f64,
        })
}

#[cfg(test)]
mod tests {
    use super::{AtomicNumbered, Species, number_from_species};
    use crate::domain::SpeciesError;
    use crate::element::Element;

    struct Site {
        number: Option<i64>,
    }

    impl AtomicNumbered for Site {
        fn atomic_number(&self) -> Option<i64> {
            self.number
        }
    }

    #[test]
    fn numbers_symbols_and_names_normalize_to_the_same_value() {
        assert_eq!(number_from_species(26), Ok(26));
        assert_eq!(number_from_species(26_u8), Ok(26));
        assert_eq!(number_from_species("Fe"), Ok(26));
        assert_eq!(number_from_species("Iron"), Ok(26));
        assert_eq!(number_from_species("26"), Ok(26));
        assert_eq!(number_from_species(26.0), Ok(26));
        assert_eq!(number_from_species(26.9), Ok(26));
    }

    #[test]
    fn range_check_is_inclusive() {
        assert_eq!(number_from_species(1), Ok(1));
        assert_eq!(number_from_species(105), Ok(105));
        assert_eq!(number_from_species(105.0), Ok(105));
        assert_eq!(
            number_from_species(0),
            Err(SpeciesError::OutOfRange { value: 0.0 })
        );
        assert_eq!(
            number_from_species(200),
            Err(SpeciesError::OutOfRange { value: 200.0 })
        );
        assert_eq!(
            number_from_species(0.5),
            Err(SpeciesError::OutOfRange { value: 0.5 })
        );
        assert_eq!(
            number_from_species(105.5),
            Err(SpeciesError::OutOfRange { value: 105.5 })
        );
        assert!(number_from_species(f64::NAN).is_err());
    }

    #[test]
    fn extreme_numbers_are_rejected_without_panicking() {
        assert_eq!(
            number_from_species(i64::MIN),
            Err(SpeciesError::OutOfRange {
                value: i64::MIN as f64
            })
        );
        assert!(number_from_species(i64::MAX).is_err());
        assert_eq!(
            number_from_species(-0.0),
            Err(SpeciesError::OutOfRange { value: -0.0 })
        );
        assert!(number_from_species(f64::INFINITY).is_err());
        assert!(number_from_species(f64::NEG_INFINITY).is_err());
        assert!(number_from_species("123456789012345678901").is_err());
    }

    #[test]
    fn unknown_text_is_reported() {
        assert_eq!(
            number_from_species("Xx"),
            Err(SpeciesError::UnknownLabel {
                label: "Xx".to_string()
            })
        );
        assert!(number_from_species("0").is_err());
    }

    #[test]
    fn elements_contribute_their_atomic_number() {
        let gold = Element::new("Gold");
        assert_eq!(number_from_species(&gold), Ok(79));

        let unresolved = Element::new("Unobtainium");
        assert_eq!(
            number_from_species(&unresolved),
            Err(SpeciesError::UnresolvedElement {
                input: "Unobtainium".to_string()
            })
        );
    }

    #[test]
    fn attribute_bearing_values_reresolve_through_the_table() {
        let site = Site { number: Some(8) };
        assert_eq!(number_from_species(Species::Numbered(&site)), Ok(8));

        let bogus = Site { number: Some(300) };
        assert!(matches!(
            number_from_species(Species::Numbered(&bogus)),
            Err(SpeciesError::InvalidSpecies { .. })
        ));

        let bare = Site { number: None };
        assert!(matches!(
            number_from_species(Species::Numbered(&bare)),
            Err(SpeciesError::InvalidSpecies { .. })
        ));

        let record = crate::table::element_table().by_symbol("Cu").unwrap();
        assert_eq!(number_from_species(Species::Numbered(record)), Ok(29));
    }
}
