use std::io::{self, Write};

use crate::operations::AngleResult;

/// Default number of fractional digits for rendered angles.
pub const DEFAULT_PRECISION: usize = 6;

/// Writes one `θ(<first>, <second>) = <angle>` line per result, in order.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_results<W: Write>(
    mut writer: W,
    results: &[AngleResult],
    precision: usize,
) -> io::Result<()> {
    for result in results {
        writeln!(writer, "{result:.precision$}")?;
    }
    writer.flush()
}
