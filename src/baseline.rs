use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::aggregate::{StatsMap, EXPECTED_STATIONS};

/// Single-threaded reference pipeline: buffered reads and generic number
/// parsing instead of the memory map and the fixed-point fast path.
///
/// Kept as a correctness and performance baseline for the parallel pipeline.
/// Parsed values are rounded into the same scaled representation, so both
/// pipelines render identical reports, and tests use this one as the oracle.
/// Like the fast path, a final line lacking its terminator is dropped.
pub fn aggregate_serial<P: AsRef<Path>>(path: P) -> crate::Result<StatsMap> {
    let mut reader = File::open(path).map(BufReader::new)?;

    let mut stations = StatsMap::with_capacity(EXPECTED_STATIONS);
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.pop() != Some(b'\n') {
            break;
        }

        let text = std::str::from_utf8(&line).expect("input is not UTF-8");
        let (name, value) = text.split_once(';').expect("record line missing ';' separator");
        let scaled = (value.parse::<f64>().expect("temperature is not a number") * 10.0).round();

        stations.entry_ref(name.as_bytes()).or_default().update(scaled as i16);
    }

    Ok(stations)
}
