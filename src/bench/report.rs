use std::time::Duration;

use crate::KEY_BITS;
use crate::bench::driver::{Measurement, Report};
use crate::mac::primitive::Algorithm;

/// The line printed before any run starts.
pub fn header(row_count: usize) -> String {
    return format!("benchmark {} data with {} bit signature", row_count, KEY_BITS);
}

/// The line printed right after one algorithm finishes, e.g. `SHA-2: 1.52s`.
pub fn measurement_line(measurement: &Measurement) -> String {
    return format!("{}: {:?}", measurement.algorithm, measurement.duration);
}

/// How many times faster `baseline` ran than `other`.
///
/// Both durations are truncated to whole milliseconds first. A zero-millisecond
/// baseline follows IEEE division and yields `inf` (or `NaN` if both are zero).
pub fn speedup(other: Duration, baseline: Duration) -> f64 {
    return other.as_millis() as f64 / baseline.as_millis() as f64;
}

pub fn speedup_line(algorithm: Algorithm, ratio: f64) -> String {
    return format!("BLAKE3 is {:.2}x faster than {}", ratio, algorithm);
}

/// The closing ratio lines, SHA-2 then SHA-3 against BLAKE3.
///
/// # Returns
/// One line per algorithm compared, or an empty vector if the report lacks
/// the BLAKE3 baseline.
pub fn summary(report: &Report) -> Vec<String> {
    let baseline: Duration = match report.duration_of(Algorithm::Blake3) {
        Some(duration) => duration,
        None => return Vec::new(),
    };

    let mut lines: Vec<String> = Vec::with_capacity(2);
    for algorithm in [Algorithm::Sha2, Algorithm::Sha3] {
        if let Some(duration) = report.duration_of(algorithm) {
            lines.push(speedup_line(algorithm, speedup(duration, baseline)));
        }
    }
    return lines;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(algorithm: Algorithm, millis: u64) -> Measurement {
        return Measurement {
            algorithm,
            rows: 10,
            duration: Duration::from_millis(millis),
        };
    }

    #[test]
    fn header_matches_expected_text() -> () {
        assert_eq!(header(1_000_000), "benchmark 1000000 data with 256 bit signature");
    }

    #[test]
    fn measurement_line_uses_algorithm_name() -> () {
        assert_eq!(measurement_line(&measurement(Algorithm::Sha3, 1500)), "SHA-3: 1.5s");
    }

    #[test]
    fn speedup_discards_sub_millisecond_precision() -> () {
        let other: Duration = Duration::from_micros(3_999);
        let baseline: Duration = Duration::from_micros(2_001);
        assert_eq!(speedup(other, baseline), 1.5);
    }

    #[test]
    fn speedup_with_zero_baseline_is_infinite() -> () {
        assert!(speedup(Duration::from_millis(5), Duration::from_micros(900)).is_infinite());
    }

    #[test]
    fn summary_formats_two_decimals() -> () {
        let report: Report = Report {
            measurements: vec![
                measurement(Algorithm::Sha2, 1000),
                measurement(Algorithm::Sha3, 2000),
                measurement(Algorithm::Blake3, 300),
            ],
        };

        assert_eq!(
            summary(&report),
            vec![
                String::from("BLAKE3 is 3.33x faster than SHA-2"),
                String::from("BLAKE3 is 6.67x faster than SHA-3"),
            ]
        );
    }

    #[test]
    fn summary_without_baseline_is_empty() -> () {
        let report: Report = Report { measurements: vec![measurement(Algorithm::Sha2, 10)] };
        assert!(summary(&report).is_empty());
    }
}
