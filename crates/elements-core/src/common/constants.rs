//! Fixed dimensions of the compiled-in element dataset.

/// Highest atomic number carried by the table (dubnium).
pub const MAX_ATOMIC_NUMBER: usize = 105;
pub const MIN_ATOMIC_NUMBER: usize = 1;

/// Gaussian terms in the X-ray form-factor fit.
pub const GAUSSIAN_TERM_COUNT: usize = 4;

/// Amplitudes, widths, and the constant term.
pub const SCATTERING_COEFFICIENT_COUNT: usize = 2 * GAUSSIAN_TERM_COUNT + 1;

/// Returns `true` when `value` is a valid atomic number for this table.
pub const fn is_tabulated_atomic_number(value: i64) -> bool {
    value >= MIN_ATOMIC_NUMBER as i64 && value <= MAX_ATOMIC_NUMBER as i64
}

/// Range-checks a fractional atomic number, then truncates toward zero.
///
/// `105.5` is rejected even though it would truncate onto the last row.
pub fn truncated_atomic_number(value: f64) -> Option<i64> {
    (MIN_ATOMIC_NUMBER as f64..=MAX_ATOMIC_NUMBER as f64)
        .contains(&value)
        .then(|| value.trunc() as i64)
}
