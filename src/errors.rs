use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// A row whose stored signature did not match the recomputed MAC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub index: usize,
    pub data: Vec<u8>,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        return write!(f, "data {} (row {})", String::from_utf8_lossy(&self.data), self.index);
    }
}

#[derive(Debug, Error)]
pub enum ChainError {
    /// The operating system entropy source could not produce the secret.
    #[error("failed to read secure random bytes: {0}")]
    Entropy(String),

    /// A key of the wrong size was handed to a primitive with a fixed key size.
    #[error("{algorithm} expects a {expected}-byte key, got {actual} bytes")]
    InvalidKeyLength {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The primitive refused the key outright.
    #[error("{algorithm} rejected a {actual}-byte key")]
    KeyRejected { algorithm: &'static str, actual: usize },

    /// Verification found at least one row whose signature does not match.
    #[error("{algorithm}: {} NOT MATCH ({} mismatched rows)", first(.mismatches), .mismatches.len())]
    ChainMismatch {
        algorithm: &'static str,
        mismatches: Vec<Mismatch>,
    },
}

impl ChainError {
    /// Mismatching rows in store order, empty for every other error kind.
    pub fn mismatches(&self) -> &[Mismatch] {
        return match self {
            ChainError::ChainMismatch { mismatches, .. } => mismatches,
            _ => &[],
        };
    }
}

fn first(mismatches: &[Mismatch]) -> String {
    return match mismatches.first() {
        Some(mismatch) => mismatch.to_string(),
        None => String::from("no row"),
    };
}
