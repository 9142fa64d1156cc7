pub mod errors;

pub use errors::{SpeciesError, SpeciesResult, TableError, TableResult};

use crate::common::constants::{
    GAUSSIAN_TERM_COUNT, SCATTERING_COEFFICIENT_COUNT, is_tabulated_atomic_number,
    truncated_atomic_number,
};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// One row of the element table. Radii are in angstroms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementRecord {
    atomic_number: u8,
    symbol: &'static str,
    name: &'static str,
    valence: f64,
    valence_electrons: u8,
    covalent_radius: Option<f64>,
    vdw_radius: Option<f64>,
    metallic_radius: Option<f64>,
}

impl ElementRecord {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        atomic_number: u8,
        symbol: &'static str,
        name: &'static str,
        valence: f64,
        valence_electrons: u8,
        covalent_radius: Option<f64>,
        vdw_radius: Option<f64>,
        metallic_radius: Option<f64>,
    ) -> Self {
        Self {
            atomic_number,
            symbol,
            name,
            valence,
            valence_electrons,
            covalent_radius,
            vdw_radius,
            metallic_radius,
        }
    }

    pub const fn atomic_number(&self) -> u8 {
        self.atomic_number
    }

    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Nominal valence. Noble gases carry `0.5`.
    pub const fn valence(&self) -> f64 {
        self.valence
    }

    pub const fn valence_electrons(&self) -> u8 {
        self.valence_electrons
    }

    /// Radius used for interatomic distance checks.
    pub const fn covalent_radius(&self) -> Option<f64> {
        self.covalent_radius
    }

    /// Radius used for volume estimation.
    pub const fn vdw_radius(&self) -> Option<f64> {
        self.vdw_radius
    }

    /// Radius used for distance checks in metallic crystals. Metals only.
    pub const fn metallic_radius(&self) -> Option<f64> {
        self.metallic_radius
    }
}

impl Display for ElementRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol)
    }
}

/// Coefficients of the four-Gaussian X-ray atomic form factor
/// `f0(s) = c + sum_i a_i * exp(-b_i * s^2)` with `s = sin(theta) / lambda`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatteringFactor {
    amplitudes: [f64; GAUSSIAN_TERM_COUNT],
    widths: [f64; GAUSSIAN_TERM_COUNT],
    constant: f64,
}

impl ScatteringFactor {
    /// All-zero row standing in for elements without a fit.
    pub const PLACEHOLDER: Self = Self {
        amplitudes: [0.0; GAUSSIAN_TERM_COUNT],
        widths: [0.0; GAUSSIAN_TERM_COUNT],
        constant: 0.0,
    };

    pub const fn new(
        amplitudes: [f64; GAUSSIAN_TERM_COUNT],
        widths: [f64; GAUSSIAN_TERM_COUNT],
        constant: f64,
    ) -> Self {
        Self {
            amplitudes,
            widths,
            constant,
        }
    }

    /// Builds a row from the flat `[a1, a2, a3, a4, b1, b2, b3, b4, c]` layout.
    pub const fn from_coefficients(values: [f64; SCATTERING_COEFFICIENT_COUNT]) -> Self {
        Self {
            amplitudes: [values[0], values[1], values[2], values[3]],
            widths: [values[4], values[5], values[6], values[7]],
            constant: values[8],
        }
    }

    pub const fn amplitudes(&self) -> &[f64; GAUSSIAN_TERM_COUNT] {
        &self.amplitudes
    }

    pub const fn widths(&self) -> &[f64; GAUSSIAN_TERM_COUNT] {
        &self.widths
    }

    pub const fn constant(&self) -> f64 {
        self.constant
    }

    /// Flat `[a1, a2, a3, a4, b1, b2, b3, b4, c]` layout.
    pub fn coefficients(&self) -> [f64; SCATTERING_COEFFICIENT_COUNT] {
        let mut values = [0.0; SCATTERING_COEFFICIENT_COUNT];
        values[..GAUSSIAN_TERM_COUNT].copy_from_slice(&self.amplitudes);
        values[GAUSSIAN_TERM_COUNT..2 * GAUSSIAN_TERM_COUNT].copy_from_slice(&self.widths);
        values[2 * GAUSSIAN_TERM_COUNT] = self.constant;
        values
    }

    /// Single coefficient in flat layout order, `None` past index 8.
    pub fn coefficient(&self, index: usize) -> Option<f64> {
        match index {
            0..GAUSSIAN_TERM_COUNT => Some(self.amplitudes[index]),
            GAUSSIAN_TERM_COUNT..8 => Some(self.widths[index - GAUSSIAN_TERM_COUNT]),
            8 => Some(self.constant),
            _ => None,
        }
    }

    /// `true` for the all-zero "no data" row.
    pub fn is_placeholder(&self) -> bool {
        self.coefficients().iter().all(|value| *value == 0.0)
    }

    /// Evaluates `f0(s)` at `s = sin(theta) / lambda` in inverse angstroms.
    pub fn form_factor(&self, s: f64) -> f64 {
        let s2 = s * s;
        self.amplitudes
            .iter()
            .zip(self.widths.iter())
            .fold(self.constant, |total, (amplitude, width)| {
                total + amplitude * (-width * s2).exp()
            })
    }

    pub fn form_factors(&self, s_values: &[f64]) -> Vec<f64> {
        s_values.iter().map(|s| self.form_factor(*s)).collect()
    }
}

/// Identifier handed to the table: an atomic number, or text that is tried
/// as a symbol first and a full name second.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ElementQuery {
    AtomicNumber(i64),
    Text(String),
}

impl ElementQuery {
    /// Integer-parseable input (surrounding whitespace allowed) becomes an
    /// atomic number. Anything else is kept verbatim for exact matching.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(value) => Self::AtomicNumber(value),
            Err(_) => Self::Text(input.to_owned()),
        }
    }
}

impl Display for ElementQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomicNumber(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for ElementQuery {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for ElementQuery {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&String> for ElementQuery {
    fn from(value: &String) -> Self {
        Self::parse(value)
    }
}

macro_rules! query_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ElementQuery {
                fn from(value: $ty) -> Self {
                    Self::AtomicNumber(i64::from(value))
                }
            }
        )*
    };
}

query_from_integer!(u8, u16, u32, i8, i16, i32, i64);

/// Whole-valued floats name the same row as the integer. Out-of-range values
/// never match, including ones like `105.5` that would truncate onto a row.
impl From<f64> for ElementQuery {
    fn from(value: f64) -> Self {
        let atomic_number = match truncated_atomic_number(value) {
            Some(atomic_number) => atomic_number,
            None if is_tabulated_atomic_number(value as i64) => 0,
            None => value as i64,
        };
        Self::AtomicNumber(atomic_number)
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementQuery, ElementRecord, ScatteringFactor};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn query_parsing_prefers_integers() {
        assert_eq!(ElementQuery::parse("26"), ElementQuery::AtomicNumber(26));
        assert_eq!(ElementQuery::parse(" 8 "), ElementQuery::AtomicNumber(8));
        assert_eq!(ElementQuery::parse("-3"), ElementQuery::AtomicNumber(-3));
        assert_eq!(
            ElementQuery::parse("Fe"),
            ElementQuery::Text("Fe".to_string())
        );
        assert_eq!(
            ElementQuery::parse(" Fe"),
            ElementQuery::Text(" Fe".to_string())
        );
        assert_eq!(ElementQuery::from(26_u8), ElementQuery::AtomicNumber(26));
        assert_eq!(ElementQuery::from("Iron").to_string(), "Iron");
    }

    #[test]
    fn float_queries_are_range_checked_then_truncated() {
        assert_eq!(ElementQuery::from(26.0), ElementQuery::AtomicNumber(26));
        assert_eq!(ElementQuery::from(26.7), ElementQuery::AtomicNumber(26));
        assert_eq!(ElementQuery::from(105.0), ElementQuery::AtomicNumber(105));
        assert_eq!(ElementQuery::from(105.5), ElementQuery::AtomicNumber(0));
        assert_eq!(ElementQuery::from(0.5), ElementQuery::AtomicNumber(0));
        assert_eq!(ElementQuery::from(200.0), ElementQuery::AtomicNumber(200));
        assert_eq!(ElementQuery::from(f64::NAN), ElementQuery::AtomicNumber(0));
        assert_eq!(
            ElementQuery::from(f64::INFINITY),
            ElementQuery::AtomicNumber(i64::MAX)
        );
    }

    #[test]
    fn flat_coefficient_layout_round_trips() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let factor = ScatteringFactor::from_coefficients(values);

        assert_eq!(factor.amplitudes(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(factor.widths(), &[5.0, 6.0, 7.0, 8.0]);
        assert_eq!(factor.constant(), 9.0);
        assert_eq!(factor.coefficients(), values);
        assert_eq!(factor.coefficient(0), Some(1.0));
        assert_eq!(factor.coefficient(4), Some(5.0));
        assert_eq!(factor.coefficient(8), Some(9.0));
        assert_eq!(factor.coefficient(9), None);
    }

    #[test]
    fn placeholder_is_all_zero_and_evaluates_to_zero() {
        let placeholder = ScatteringFactor::PLACEHOLDER;
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.form_factor(0.0), 0.0);
        assert_eq!(placeholder.form_factor(0.5), 0.0);

        let widths_only = ScatteringFactor::new([0.0; 4], [1.0, 2.0, 3.0, 4.0], 0.5);
        assert!(!widths_only.is_placeholder());
    }

    #[test]
    fn form_factor_sums_gaussians_and_constant() {
        let factor = ScatteringFactor::new([1.0, 2.0, 0.0, 0.0], [1.0, 0.5, 0.0, 0.0], 0.25);

        assert_close(factor.form_factor(0.0), 3.25, 1.0e-12);
        let expected = 0.25 + (-1.0_f64).exp() + 2.0 * (-0.5_f64).exp();
        assert_close(factor.form_factor(1.0), expected, 1.0e-12);
        assert_close(factor.form_factor(-1.0), expected, 1.0e-12);

        let values = factor.form_factors(&[0.0, 1.0]);
        assert_eq!(values.len(), 2);
        assert_close(values[1], expected, 1.0e-12);
    }

    #[test]
    fn record_displays_its_symbol() {
        let record =
            ElementRecord::new(26, "Fe", "Iron", 3.0, 3, Some(1.32), Some(2.0), Some(1.26));
        assert_eq!(record.to_string(), "Fe");
        assert_eq!(record.metallic_radius(), Some(1.26));
    }
}
