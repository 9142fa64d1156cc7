use crate::domain::{ElementQuery, ElementRecord, ScatteringFactor};
use crate::table::element_table;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// An element looked up by atomic number, symbol, or name.
///
/// Construction never fails. When the query matches no row the value is
/// unresolved and every derived accessor returns `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    input: ElementQuery,
    record: Option<&'static ElementRecord>,
    scattering: Option<&'static ScatteringFactor>,
}

impl Element {
    pub fn new(input: impl Into<ElementQuery>) -> Self {
        let input = input.into();
        let table = element_table();
        let record = table.resolve(&input);
        if record.is_none() {
            tracing::debug!(query = %input, "element query did not match any row");
        }
        let scattering =
            record.and_then(|record| table.scattering_for(i64::from(record.atomic_number())));

        Self {
            input,
            record,
            scattering,
        }
    }

    pub fn input(&self) -> &ElementQuery {
        &self.input
    }

    pub fn is_resolved(&self) -> bool {
        self.record.is_some()
    }

    pub fn record(&self) -> Option<&'static ElementRecord> {
        self.record
    }

    pub fn atomic_number(&self) -> Option<u8> {
        self.record.map(ElementRecord::atomic_number)
    }

    pub fn symbol(&self) -> Option<&'static str> {
        self.record.map(ElementRecord::symbol)
    }

    pub fn name(&self) -> Option<&'static str> {
        self.record.map(ElementRecord::name)
    }

    pub fn valence(&self) -> Option<f64> {
        self.record.map(ElementRecord::valence)
    }

    pub fn valence_electrons(&self) -> Option<u8> {
        self.record.map(ElementRecord::valence_electrons)
    }

    pub fn covalent_radius(&self) -> Option<f64> {
        self.record.and_then(ElementRecord::covalent_radius)
    }

    pub fn vdw_radius(&self) -> Option<f64> {
        self.record.and_then(ElementRecord::vdw_radius)
    }

    pub fn metallic_radius(&self) -> Option<f64> {
        self.record.and_then(ElementRecord::metallic_radius)
    }

    /// Form-factor coefficients. Elements without a fit resolve to the
    /// all-zero placeholder row.
    pub fn scattering(&self) -> Option<&'static ScatteringFactor> {
        self.scattering
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.record {
            Some(record) => f.write_str(record.symbol()),
            None => write!(f, "unresolved({})", self.input),
        }
    }
}
