//! Error types for genetic data at the crate boundary.
//!
//! The engine itself never fails on well-typed input; these errors surface
//! when collaborators hand in names, maps or DNA strings that do not describe
//! a complete genome.

use super::genome::Locus;
use thiserror::Error;

/// Errors raised while converting external data into genetic types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticsError {
    /// A locus name outside the fixed vocabulary.
    #[error("Unknown locus: {0}")]
    UnknownLocus(String),

    /// A genome or phenotype map without an entry for the given locus.
    #[error("Missing locus: {0}")]
    MissingLocus(Locus),

    /// A tier name outside Common..Legendary.
    #[error("Unknown tier: {0}")]
    UnknownTier(String),

    /// An emotion name outside the fixed set.
    #[error("Unknown emotion: {0}")]
    UnknownEmotion(String),

    /// A DNA string that is not hex-encoded genome JSON.
    #[error("Invalid DNA: {0}")]
    InvalidDna(String),
}

/// Result type alias for genetic data conversions.
pub type Result<T> = std::result::Result<T, GeneticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeneticsError::MissingLocus(Locus::Aura);
        assert_eq!(err.to_string(), "Missing locus: Aura");

        let err = GeneticsError::UnknownLocus("Fin".to_string());
        assert_eq!(err.to_string(), "Unknown locus: Fin");
    }
}
