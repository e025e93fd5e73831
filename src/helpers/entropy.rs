use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::SECRET_LEN;
use crate::errors::ChainError;

use rand::TryRngCore;
use rand::rngs::OsRng;

/// The initial chain key, shared by every algorithm run of one process.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret([u8; SECRET_LEN]);

impl Secret {
    /// Reads a fresh secret from the operating system entropy source.
    ///
    /// # Returns
    /// A `Secret` filled with cryptographically secure random bytes, or
    /// `ChainError::Entropy` if the source cannot deliver them.
    pub fn generate() -> Result<Self, ChainError> {
        let mut bytes: [u8; SECRET_LEN] = [0u8; SECRET_LEN];
        OsRng.try_fill_bytes(&mut bytes).map_err(|e| ChainError::Entropy(e.to_string()))?;
        return Ok(Self(bytes));
    }

    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        return Self(bytes);
    }

    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        return &self.0;
    }
}

impl AsRef<[u8]> for Secret {
    fn as_ref(&self) -> &[u8] {
        return &self.0;
    }
}

// Never print key material.
impl Debug for Secret {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        return f.write_str("Secret(..)");
    }
}
