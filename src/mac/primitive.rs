use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::SIGNATURE_LEN;
use crate::errors::ChainError;

/// Fixed-length MAC output, shared by every supported algorithm.
pub type Signature = [u8; SIGNATURE_LEN];

/// Keyed hash capability used by the chain engine.
///
/// Implementations must be deterministic: the same key and message always
/// produce the same signature, with no state carried between calls.
pub trait MacPrimitive {
    /// Human readable algorithm name, as printed in the report.
    const NAME: &'static str;

    /// Computes `MAC(key, message)`.
    ///
    /// # Parameters
    /// - `key`: The MAC key. Its accepted length depends on the construction.
    /// - `message`: The bytes to authenticate.
    ///
    /// # Returns
    /// The 32-byte signature, or `ChainError::InvalidKeyLength` when the
    /// construction cannot accept `key`.
    fn mac(&self, key: &[u8], message: &[u8]) -> Result<Signature, ChainError>;
}

/// The algorithms the benchmark knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha2,
    Sha3,
    Blake3,
}

impl Algorithm {
    /// Run order of the benchmark. BLAKE3 comes last, it is the ratio baseline.
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha2, Algorithm::Sha3, Algorithm::Blake3];

    pub fn name(&self) -> &'static str {
        return match self {
            Algorithm::Sha2 => "SHA-2",
            Algorithm::Sha3 => "SHA-3",
            Algorithm::Blake3 => "BLAKE3",
        };
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        return f.write_str(self.name());
    }
}

/// Copies a digest of exactly `SIGNATURE_LEN` bytes into a `Signature`.
#[inline]
pub(crate) fn to_signature(digest: &[u8]) -> Signature {
    let mut signature: Signature = [0u8; SIGNATURE_LEN];
    signature.copy_from_slice(digest);
    return signature;
}
