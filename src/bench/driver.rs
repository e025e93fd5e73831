use std::time::{Duration, Instant};

use crate::chain::engine::{sign, verify};
use crate::chain::row::RowStore;
use crate::errors::ChainError;
use crate::helpers::entropy::Secret;
use crate::mac::hmac_sha2::HmacSha2;
use crate::mac::hmac_sha3::HmacSha3;
use crate::mac::keyed_blake3::KeyedBlake3;
use crate::mac::primitive::{Algorithm, MacPrimitive};

use tracing::{debug, info_span};

/// Wall-clock cost of one sign+verify pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub rows: usize,
    pub duration: Duration,
}

/// Results of a complete benchmark, one measurement per algorithm in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub measurements: Vec<Measurement>,
}

impl Report {
    pub fn duration_of(&self, algorithm: Algorithm) -> Option<Duration> {
        return self.measurements.iter().find(|m| m.algorithm == algorithm).map(|m| m.duration);
    }
}

/// Times sign followed by verify over `rows`.
///
/// Only the sign+verify pair is inside the timed region; the caller seeds
/// the store beforehand.
///
/// # Parameters
/// - `primitive`: The MAC to benchmark.
/// - `rows`: A freshly seeded, unsigned store. It is signed in place.
/// - `secret`: The initial chain key.
///
/// # Returns
/// The elapsed time, or the first error raised by sign or verify.
pub fn run_with<M: MacPrimitive>(primitive: &M, rows: &mut RowStore, secret: &[u8]) -> Result<Duration, ChainError> {
    let start: Instant = Instant::now();
    sign(rows, primitive, secret)?;
    verify(rows, primitive, secret)?;
    return Ok(start.elapsed());
}

/// Seeds a fresh store of `row_count` rows and benchmarks `algorithm` on it.
///
/// The store lives only for this call, so every run starts unsigned.
///
/// # Parameters
/// - `algorithm`: Which primitive to run.
/// - `row_count`: Number of rows to seed.
/// - `secret`: The process-wide secret.
///
/// # Returns
/// A `Measurement` on success. A verification mismatch is returned as
/// `ChainError::ChainMismatch` and the run has no measurement.
pub fn run(algorithm: Algorithm, row_count: usize, secret: &Secret) -> Result<Measurement, ChainError> {
    let _span = info_span!("run", algorithm = algorithm.name(), rows = row_count).entered();
    let mut rows: RowStore = RowStore::seed(row_count);

    let duration: Duration = match algorithm {
        Algorithm::Sha2 => run_with(&HmacSha2, &mut rows, secret.as_ref())?,
        Algorithm::Sha3 => run_with(&HmacSha3, &mut rows, secret.as_ref())?,
        Algorithm::Blake3 => run_with(&KeyedBlake3, &mut rows, secret.as_ref())?,
    };
    debug!(?duration, "run finished");

    return Ok(Measurement {
        algorithm,
        rows: row_count,
        duration,
    });
}

/// Runs every algorithm in `Algorithm::ALL` order with the same secret.
///
/// `on_measurement` is called as soon as each run completes. The first
/// failing run stops the benchmark; later algorithms are not run.
pub fn run_all<F: FnMut(&Measurement)>(row_count: usize, secret: &Secret, mut on_measurement: F) -> Result<Report, ChainError> {
    let mut report: Report = Report::default();

    for algorithm in Algorithm::ALL {
        let measurement: Measurement = run(algorithm, row_count, secret)?;
        on_measurement(&measurement);
        report.measurements.push(measurement);
    }
    return Ok(report);
}
