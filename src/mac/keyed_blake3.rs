use blake3::{KEY_LEN, keyed_hash};

use crate::errors::ChainError;
use crate::mac::primitive::{MacPrimitive, Signature};

/// BLAKE3 in its native keyed mode. Not an HMAC wrapper: the key is fed
/// straight into the compression function, so it must be exactly 32 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyedBlake3;

impl MacPrimitive for KeyedBlake3 {
    const NAME: &'static str = "BLAKE3";

    #[inline]
    fn mac(&self, key: &[u8], message: &[u8]) -> Result<Signature, ChainError> {
        let key: &[u8; KEY_LEN] = key.try_into().map_err(|_| ChainError::InvalidKeyLength {
            algorithm: Self::NAME,
            expected: KEY_LEN,
            actual: key.len(),
        })?;
        return Ok(*keyed_hash(key, message).as_bytes());
    }
}
