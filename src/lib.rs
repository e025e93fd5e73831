pub mod bench {
    pub mod driver;
    pub mod report;
}
pub mod chain {
    pub mod engine;
    pub mod row;
}
pub mod helpers {
    pub mod entropy;
    pub mod logging;
}
pub mod mac {
    pub mod hmac_sha2;
    pub mod hmac_sha3;
    pub mod keyed_blake3;
    pub mod primitive;
}
pub mod errors;


// Chain-MAC benchmark constants:
// 1. Every run signs and verifies DEFAULT_ROW_COUNT rows.
// 2. The initial chain key (secret) is SECRET_LEN bytes.
// 3. Every signature is SIGNATURE_LEN bytes (256 bits) for all three algorithms.

// Number of rows seeded for each algorithm run.
pub const DEFAULT_ROW_COUNT: usize = 1_000_000;
// Length of the process-wide secret in bytes.
pub const SECRET_LEN: usize = 32;
// Length of a row signature in bytes.
pub const SIGNATURE_LEN: usize = 32;
// Signature size in bits, as printed in the report header.
pub const KEY_BITS: usize = SIGNATURE_LEN * 8;
// Log filter used when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
// Number of hex characters of a signature shown when a row is displayed.
pub const SIGNATURE_PREVIEW_HEX: usize = 16;
