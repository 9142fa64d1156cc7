//! Periodic-table element data: atomic numbers, symbols, names, valences,
//! covalent / van der Waals / metallic radii, and X-ray scattering-factor
//! coefficients for elements 1 through 105.

pub mod common;
pub mod domain;
pub mod element;
pub mod species;
pub mod table;

pub use domain::{
    ElementQuery, ElementRecord, ScatteringFactor, SpeciesError, SpeciesResult, TableError,
    TableResult,
};
pub use element::Element;
pub use species::{AtomicNumbered, Species, number_from_species};
pub use table::{ElementTable, element_table};
