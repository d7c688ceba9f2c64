//! Job duration loading.

use crate::error::{AnnealError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads job durations from tabular `id,duration` records.
///
/// The first non-blank record is a header and is skipped; blank lines
/// are ignored throughout. Any record without a parseable duration
/// fails the whole load, so the optimizer never runs over partial data.
/// A header with no data records yields zero jobs, which the solver
/// treats as trivially balanced.
pub fn load_durations<R: BufRead>(reader: R) -> Result<Vec<u64>> {
    let mut durations = Vec::new();
    let mut saw_header = false;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }
        if !saw_header {
            saw_header = true;
            continue;
        }

        let mut fields = line.split(',');
        // split() yields at least one field for a non-empty line.
        let _id = fields.next();
        let field = fields.next().ok_or_else(|| AnnealError::Input {
            line: line_number,
            reason: "missing duration field".into(),
        })?;
        let duration = field.trim().parse::<u64>().map_err(|e| AnnealError::Input {
            line: line_number,
            reason: format!("invalid duration {:?}: {e}", field.trim()),
        })?;
        durations.push(duration);
    }

    if !saw_header {
        return Err(AnnealError::Input {
            line: 1,
            reason: "empty input: expected a header record".into(),
        });
    }

    Ok(durations)
}

/// Reads job durations from a file (see [`load_durations`]).
pub fn load_durations_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    let file = File::open(path)?;
    load_durations(BufReader::new(file))
}
