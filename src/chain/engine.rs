use crate::chain::row::{Row, RowStore};
use crate::errors::{ChainError, Mismatch};
use crate::mac::primitive::{MacPrimitive, Signature};

use subtle::ConstantTimeEq;
use tracing::{debug, warn};

/// Signs every row in store order, chaining keys.
///
/// Row 0 is keyed with `secret`; row i is keyed with the signature just
/// produced for row i - 1. Existing signatures are overwritten.
///
/// # Parameters
/// - `rows`: The store to sign in place.
/// - `primitive`: The MAC used for every link.
/// - `secret`: The initial chain key.
///
/// # Returns
/// `Ok(())` once every row carries a signature, or the primitive's error
/// (for example a key it cannot accept) without touching later rows.
pub fn sign<M: MacPrimitive>(rows: &mut RowStore, primitive: &M, secret: &[u8]) -> Result<(), ChainError> {
    let mut previous: Option<Signature> = None;

    for row in rows.iter_mut() {
        let key: &[u8] = match &previous {
            Some(signature) => signature,
            None => secret,
        };
        let signature: Signature = primitive.mac(key, &row.data)?;
        row.signature = Some(signature);
        previous = Some(signature);
    }
    debug!(algorithm = M::NAME, rows = rows.len(), "chain signed");
    return Ok(());
}

/// Recomputes the chain and compares it against the stored signatures.
///
/// The whole store is scanned; every mismatching row is collected in store
/// order. The next key is always the recomputed MAC, never the stored one, so
/// a single bad signature is reported on its own row only.
///
/// # Parameters
/// - `rows`: The signed store to check.
/// - `primitive`: The MAC the store was signed with.
/// - `secret`: The initial chain key used when signing.
///
/// # Returns
/// `Ok(())` when every row matches, `ChainError::ChainMismatch` listing every
/// mismatching row otherwise.
pub fn verify<M: MacPrimitive>(rows: &RowStore, primitive: &M, secret: &[u8]) -> Result<(), ChainError> {
    let mismatches: Vec<Mismatch> = find_mismatches(rows, primitive, secret)?;

    if mismatches.is_empty() {
        debug!(algorithm = M::NAME, rows = rows.len(), "chain verified");
        return Ok(());
    }

    warn!(algorithm = M::NAME, count = mismatches.len(), first = %mismatches[0], "chain verification failed");
    return Err(ChainError::ChainMismatch {
        algorithm: M::NAME,
        mismatches,
    });
}

/// Same walk as [`verify`], returning the mismatching rows instead of an error.
pub fn find_mismatches<M: MacPrimitive>(rows: &RowStore, primitive: &M, secret: &[u8]) -> Result<Vec<Mismatch>, ChainError> {
    let mut mismatches: Vec<Mismatch> = Vec::new();
    let mut previous: Option<Signature> = None;

    for (index, row) in rows.iter().enumerate() {
        let key: &[u8] = match &previous {
            Some(signature) => signature,
            None => secret,
        };
        let expected: Signature = primitive.mac(key, &row.data)?;

        if !matches(row, &expected) {
            mismatches.push(Mismatch {
                index,
                data: row.data.clone(),
            });
        }
        previous = Some(expected);
    }
    return Ok(mismatches);
}

// Unsigned rows never match.
#[inline]
fn matches(row: &Row, expected: &Signature) -> bool {
    return match &row.signature {
        Some(stored) => bool::from(stored[..].ct_eq(&expected[..])),
        None => false,
    };
}
