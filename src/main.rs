use std::io::stdout;

use anyhow::{Context, Result};
use chainmac::DEFAULT_ROW_COUNT;
use chainmac::bench::driver::{Measurement, Report, run_all};
use chainmac::bench::report::{header, measurement_line, summary};
use chainmac::helpers::entropy::Secret;
use chainmac::helpers::logging;

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use tracing::error;

/// Signs and verifies `DEFAULT_ROW_COUNT` chained rows with HMAC-SHA-256,
/// HMAC-SHA3-256 and keyed BLAKE3 in turn, printing each timing as it
/// completes and BLAKE3's speedup over the other two at the end.
fn main() -> Result<()> {
    logging::init();

    let secret: Secret = Secret::generate().inspect_err(|e| error!(%e, "no secret")).context("generating chain secret")?;
    let row_count: usize = DEFAULT_ROW_COUNT;

    execute!(stdout(), SetForegroundColor(Color::Cyan), Print(format!("{}\n", header(row_count))), ResetColor)?;

    let report: Report = run_all(row_count, &secret, |measurement: &Measurement| {
        println!("{}", measurement_line(measurement));
    })
    .inspect_err(|e| error!(%e, "benchmark aborted"))
    .context("chain verification failed")?;

    println!();
    execute!(stdout(), SetForegroundColor(Color::Green))?;
    let lines: Vec<String> = summary(&report);
    for (i, line) in lines.iter().enumerate() {
        // No newline after the final line.
        if i + 1 < lines.len() {
            println!("{}", line);
        } else {
            print!("{}", line);
        }
    }
    execute!(stdout(), ResetColor)?;

    return Ok(());
}
