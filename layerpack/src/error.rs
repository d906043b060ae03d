use thiserror::Error;

/// Everything that can go wrong when describing packages or planning a pallet.
///
/// All variants are input problems. Items that don't fit into a layer are not
/// an error; they are deferred to a later layer or reported as left over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("cannot plan a pallet without any packages")]
    EmptyPackages,

    #[error(
        "pallet dimensions must be non-zero, got {width}x{depth} with a height limit of {height_limit}"
    )]
    InvalidPallet {
        width: u32,
        depth: u32,
        height_limit: u32,
    },

    #[error("package \"{name}\" is invalid: {reason}")]
    InvalidPackage { name: String, reason: &'static str },
}

impl PackError {
    /// Tells whether this error was caused by bad caller input. Currently true
    /// for every variant.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            PackError::EmptyPackages
            | PackError::InvalidPallet { .. }
            | PackError::InvalidPackage { .. } => true,
        }
    }
}
