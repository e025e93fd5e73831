use hmac::{Hmac, Mac};
use sha3::Sha3_256;

use crate::errors::ChainError;
use crate::mac::primitive::{MacPrimitive, Signature, to_signature};

type HmacSha3_256 = Hmac<Sha3_256>;

/// HMAC over SHA3-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha3;

impl MacPrimitive for HmacSha3 {
    const NAME: &'static str = "SHA-3";

    #[inline]
    fn mac(&self, key: &[u8], message: &[u8]) -> Result<Signature, ChainError> {
        let mut mac: HmacSha3_256 =
            HmacSha3_256::new_from_slice(key).map_err(|_| ChainError::KeyRejected { algorithm: Self::NAME, actual: key.len() })?;
        mac.update(message);
        return Ok(to_signature(&mac.finalize().into_bytes()));
    }
}
