use ring::hmac::{HMAC_SHA256, Key, Tag, sign};

use crate::errors::ChainError;
use crate::mac::primitive::{MacPrimitive, Signature, to_signature};

/// HMAC over SHA-256.
///
/// Keys of any length are accepted; oversized keys are hashed first as
/// HMAC prescribes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha2;

impl MacPrimitive for HmacSha2 {
    const NAME: &'static str = "SHA-2";

    #[inline]
    fn mac(&self, key: &[u8], message: &[u8]) -> Result<Signature, ChainError> {
        let key: Key = Key::new(HMAC_SHA256, key);
        let tag: Tag = sign(&key, message);
        return Ok(to_signature(tag.as_ref()));
    }
}
