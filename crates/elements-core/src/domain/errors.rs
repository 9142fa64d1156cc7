pub type SpeciesResult<T> = Result<T, SpeciesError>;
pub type TableResult<T> = Result<T, TableError>;

/// Why a species value could not be normalized to an atomic number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpeciesError {
    #[error("atomic number must be between 1 and 105, got {value}")]
    OutOfRange { value: f64 },
    #[error("invalid atomic symbol, name, or number '{label}'")]
    UnknownLabel { label: String },
    #[error("element '{input}' has no atomic number")]
    UnresolvedElement { input: String },
    #[error("invalid species: {reason}")]
    InvalidSpecies { reason: String },
}

/// First structural violation found while validating the element table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("element table has {actual} rows, expected {expected}")]
    RowCount { expected: usize, actual: usize },
    #[error("scattering table has {actual} rows, expected {expected}")]
    ScatteringRowCount { expected: usize, actual: usize },
    #[error("row {index} carries atomic number {atomic_number}, expected {expected}")]
    MisnumberedRow {
        index: usize,
        atomic_number: u8,
        expected: usize,
    },
    #[error("row {index} has an empty {field}")]
    EmptyLabel { index: usize, field: &'static str },
    #[error("symbol '{symbol}' appears at rows {first} and {second}")]
    DuplicateSymbol {
        symbol: &'static str,
        first: usize,
        second: usize,
    },
    #[error("name '{name}' appears at rows {first} and {second}")]
    DuplicateName {
        name: &'static str,
        first: usize,
        second: usize,
    },
    #[error("row {index} has non-positive {field} {value}")]
    NonPositiveRadius {
        index: usize,
        field: &'static str,
        value: f64,
    },
}
