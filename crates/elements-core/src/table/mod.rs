//! The compiled-in element table and its lookups.
//!
//! Element rows and scattering-factor rows are two co-indexed static arrays.
//! Lookups are linear scans; the table is small enough that no index is kept.

mod data;
mod scattering;

use crate::common::constants::{MAX_ATOMIC_NUMBER, SCATTERING_COEFFICIENT_COUNT};
use crate::domain::{ElementQuery, ElementRecord, ScatteringFactor, TableError, TableResult};
use data::ELEMENT_ROWS;
use scattering::SCATTERING_ROWS;

#[derive(Debug, Clone, Copy)]
pub struct ElementTable {
    records: &'static [ElementRecord],
    scattering: &'static [ScatteringFactor],
}

static ELEMENT_TABLE: ElementTable = ElementTable {
    records: &ELEMENT_ROWS,
    scattering: &SCATTERING_ROWS,
};

/// Shared table for atomic numbers 1..=105.
pub fn element_table() -> &'static ElementTable {
    &ELEMENT_TABLE
}

impl ElementTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &'static [ElementRecord] {
        self.records
    }

    /// Records paired with their scattering-factor rows, in atomic-number order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&'static ElementRecord, &'static ScatteringFactor)> {
        self.records.iter().zip(self.scattering.iter())
    }

    /// Resolves a query to a row.
    ///
    /// Atomic numbers only match atomic numbers. Text is matched exactly
    /// against symbols first and full names second.
    pub fn resolve(&self, query: &ElementQuery) -> Option<&'static ElementRecord> {
        match query {
            ElementQuery::AtomicNumber(value) => self.by_atomic_number(*value),
            ElementQuery::Text(text) => self.by_symbol(text).or_else(|| self.by_name(text)),
        }
    }

    pub fn by_atomic_number(&self, atomic_number: i64) -> Option<&'static ElementRecord> {
        self.index_of(atomic_number).map(|index| &self.records[index])
    }

    /// Case-sensitive exact match.
    pub fn by_symbol(&self, symbol: &str) -> Option<&'static ElementRecord> {
        self.records.iter().find(|record| record.symbol() == symbol)
    }

    /// Case-sensitive exact match.
    pub fn by_name(&self, name: &str) -> Option<&'static ElementRecord> {
        self.records.iter().find(|record| record.name() == name)
    }

    /// Row index holding `atomic_number`.
    pub fn index_of(&self, atomic_number: i64) -> Option<usize> {
        self.records
            .iter()
            .position(|record| i64::from(record.atomic_number()) == atomic_number)
    }

    pub fn scattering_for(&self, atomic_number: i64) -> Option<&'static ScatteringFactor> {
        self.index_of(atomic_number)
            .and_then(|index| self.scattering.get(index))
    }

    /// Projects one field from every row, in atomic-number order.
    pub fn column<T>(&self, project: impl Fn(&ElementRecord) -> T) -> Vec<T> {
        self.records.iter().map(project).collect()
    }

    pub fn atomic_numbers(&self) -> Vec<u8> {
        self.column(ElementRecord::atomic_number)
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        self.column(ElementRecord::symbol)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.column(ElementRecord::name)
    }

    pub fn valences(&self) -> Vec<f64> {
        self.column(ElementRecord::valence)
    }

    pub fn valence_electrons(&self) -> Vec<u8> {
        self.column(ElementRecord::valence_electrons)
    }

    pub fn covalent_radii(&self) -> Vec<Option<f64>> {
        self.column(ElementRecord::covalent_radius)
    }

    pub fn vdw_radii(&self) -> Vec<Option<f64>> {
        self.column(ElementRecord::vdw_radius)
    }

    pub fn metallic_radii(&self) -> Vec<Option<f64>> {
        self.column(ElementRecord::metallic_radius)
    }

    /// Whole scattering-factor table, co-indexed with [`Self::records`].
    pub fn scattering_factors(&self) -> &'static [ScatteringFactor] {
        self.scattering
    }

    /// Coefficient `index` (flat `[a1..a4, b1..b4, c]` order) from every row.
    pub fn scattering_column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= SCATTERING_COEFFICIENT_COUNT {
            return None;
        }
        self.scattering
            .iter()
            .map(|factor| factor.coefficient(index))
            .collect()
    }

    /// Checks row count, numbering, label uniqueness, radius signs, and that
    /// the scattering table stays co-indexed with the element rows.
    pub fn validate(&self) -> TableResult<()> {
        if self.records.len() != MAX_ATOMIC_NUMBER {
            return Err(TableError::RowCount {
                expected: MAX_ATOMIC_NUMBER,
                actual: self.records.len(),
            });
        }
        if self.scattering.len() != self.records.len() {
            return Err(TableError::ScatteringRowCount {
                expected: self.records.len(),
                actual: self.scattering.len(),
            });
        }

        for (index, record) in self.records.iter().enumerate() {
            let expected = index + 1;
            if usize::from(record.atomic_number()) != expected {
                return Err(TableError::MisnumberedRow {
                    index,
                    atomic_number: record.atomic_number(),
                    expected,
                });
            }
            if record.symbol().is_empty() {
                return Err(TableError::EmptyLabel {
                    index,
                    field: "symbol",
                });
            }
            if record.name().is_empty() {
                return Err(TableError::EmptyLabel {
                    index,
                    field: "name",
                });
            }
            for (field, radius) in [
                ("covalent radius", record.covalent_radius()),
                ("van der Waals radius", record.vdw_radius()),
                ("metallic radius", record.metallic_radius()),
            ] {
                if let Some(value) = radius.filter(|value| *value <= 0.0) {
                    return Err(TableError::NonPositiveRadius {
                        index,
                        field,
                        value,
                    });
                }
            }

            for (offset, other) in self.records[index + 1..].iter().enumerate() {
                let second = index + 1 + offset;
                if other.symbol() == record.symbol() {
                    return Err(TableError::DuplicateSymbol {
                        symbol: record.symbol(),
                        first: index,
                        second,
                    });
                }
                if other.name() == record.name() {
                    return Err(TableError::DuplicateName {
                        name: record.name(),
                        first: index,
                        second,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementTable, element_table};
    use crate::domain::{ElementQuery, ElementRecord, ScatteringFactor, TableError};

    #[test]
    fn shipped_table_validates() {
        assert_eq!(element_table().validate(), Ok(()));
        assert_eq!(element_table().len(), 105);
        assert!(!element_table().is_empty());
    }

    #[test]
    fn resolves_by_number_symbol_and_name() {
        let table = element_table();

        let iron = table.resolve(&ElementQuery::from(26)).unwrap();
        assert_eq!((iron.symbol(), iron.name()), ("Fe", "Iron"));

        let iron = table.resolve(&ElementQuery::from("Fe")).unwrap();
        assert_eq!(iron.atomic_number(), 26);

        let oxygen = table.resolve(&ElementQuery::from("Oxygen")).unwrap();
        assert_eq!((oxygen.atomic_number(), oxygen.symbol()), (8, "O"));

        let numeric_text = table.resolve(&ElementQuery::from("79")).unwrap();
        assert_eq!(numeric_text.symbol(), "Au");
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let table = element_table();
        assert!(table.resolve(&ElementQuery::from("fe")).is_none());
        assert!(table.resolve(&ElementQuery::from("FE")).is_none());
        assert!(table.resolve(&ElementQuery::from("iron")).is_none());
        assert!(table.resolve(&ElementQuery::from("Fe ")).is_none());
        assert!(table.resolve(&ElementQuery::from("Xx")).is_none());
        assert!(table.resolve(&ElementQuery::from("")).is_none());
    }

    #[test]
    fn out_of_range_numbers_do_not_fall_through() {
        let table = element_table();
        for value in [0, 106, -1, i64::MAX] {
            assert!(table.resolve(&ElementQuery::AtomicNumber(value)).is_none());
        }
        assert!(table.scattering_for(0).is_none());
    }

    #[test]
    fn columns_follow_atomic_number_order() {
        let table = element_table();
        let symbols = table.symbols();
        assert_eq!(symbols.len(), 105);
        assert_eq!(symbols[0], "H");
        assert_eq!(symbols[25], "Fe");
        assert_eq!(symbols[104], "Db");

        let numbers = table.atomic_numbers();
        assert!(numbers.iter().enumerate().all(|(i, z)| usize::from(*z) == i + 1));

        assert_eq!(table.names()[7], "Oxygen");
        assert_eq!(table.valences()[1], 0.5);
        assert_eq!(table.valence_electrons()[5], 4);
        assert_eq!(table.covalent_radii()[96], None);
        assert_eq!(table.vdw_radii()[0], Some(1.20));
        assert_eq!(table.metallic_radii()[0], None);
        assert_eq!(table.metallic_radii()[2], Some(1.52));
        assert_eq!(table.column(|record| record.name().len())[25], 4);
    }

    #[test]
    fn scattering_rows_stay_co_indexed() {
        let table = element_table();
        assert_eq!(table.scattering_factors().len(), table.len());

        let iron = table.scattering_for(26).unwrap();
        assert_eq!(iron.amplitudes()[0], 11.769);
        assert_eq!(iron.constant(), 1.037);

        let polonium = table.scattering_for(84).unwrap();
        assert!(polonium.is_placeholder());
        let dubnium = table.scattering_for(105).unwrap();
        assert!(dubnium.is_placeholder());
        let plutonium = table.scattering_for(94).unwrap();
        assert!(!plutonium.is_placeholder());

        for (record, factor) in table.iter() {
            assert_eq!(factor.coefficients().len(), 9, "{record}");
        }
    }

    #[test]
    fn scattering_column_projects_one_coefficient() {
        let table = element_table();
        let constants = table.scattering_column(8).unwrap();
        assert_eq!(constants.len(), 105);
        assert_eq!(constants[0], 0.003);
        assert_eq!(constants[25], 1.037);
        assert_eq!(constants[104], 0.0);

        assert!(table.scattering_column(9).is_none());
    }

    #[test]
    fn validation_reports_first_violation() {
        static SHORT: [ElementRecord; 1] = [ElementRecord::new(
            1,
            "H",
            "Hydrogen",
            1.0,
            1,
            Some(0.31),
            Some(1.20),
            None,
        )];
        static ONE_FACTOR: [ScatteringFactor; 1] = [ScatteringFactor::PLACEHOLDER];

        let short = ElementTable {
            records: &SHORT,
            scattering: &ONE_FACTOR,
        };
        assert_eq!(
            short.validate(),
            Err(TableError::RowCount {
                expected: 105,
                actual: 1
            })
        );

        let mut rows = super::ELEMENT_ROWS;
        rows[25] = ElementRecord::new(26, "Co", "Iron", 3.0, 3, None, None, None);
        let leaked: &'static [ElementRecord] = Box::leak(Box::new(rows));
        let duplicated = ElementTable {
            records: leaked,
            scattering: &super::SCATTERING_ROWS,
        };
        assert_eq!(
            duplicated.validate(),
            Err(TableError::DuplicateSymbol {
                symbol: "Co",
                first: 25,
                second: 26,
            })
        );

        let misaligned = ElementTable {
            records: &super::ELEMENT_ROWS,
            scattering: &ONE_FACTOR,
        };
        assert_eq!(
            misaligned.validate(),
            Err(TableError::ScatteringRowCount {
                expected: 105,
                actual: 1
            })
        );
    }
}
