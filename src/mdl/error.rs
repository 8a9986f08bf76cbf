use thiserror::Error;

/// Errors produced while reconstructing or preparing MDL connection tables.
///
/// Isotope misses and unknown substructure types are not errors: the first
/// degrades to the natural element, the second is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MdlError {
    /// A bond record names an atom index that was never materialized.
    #[error("bond {bond_index} references missing atom {atom_index}")]
    BrokenBondReference { bond_index: usize, atom_index: usize },
    /// The node resolver produced no node for an atom record.
    #[error("cannot create a structure node for atom {atom_index}")]
    NodeUnconstructible { atom_index: usize },
    /// A block reader was handed no lines at all.
    #[error("empty MDL block")]
    EmptyBlock,
    #[error("missing count line")]
    MissingCountLine,
    #[error("malformed count line {0:?}")]
    MalformedCountLine(String),
    #[error("malformed date/time field {0:?}")]
    MalformedDate(String),
    /// Failure reported by an external CTab tokenizer.
    #[error("tokenizer: {0}")]
    Tokenizer(String),
    /// Failure reported by an external CTab line formatter.
    #[error("formatter: {0}")]
    Formatter(String),
}

pub type Result<T> = std::result::Result<T, MdlError>;
