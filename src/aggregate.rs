use hashbrown::HashMap;

use crate::{
    parse::{parse_temperature, split_record},
    segment::Lines,
    stats::Stats,
};

/// Mapping from station name to its running statistics.
///
/// Names are hashed and compared as raw bytes, with no normalization: two
/// records with byte-identical names always land in the same entry. Lookups
/// during the scan borrow the name slice straight out of the input buffer;
/// an owned key is allocated only when a name is inserted for the first
/// time (`entry_ref`).
pub type StatsMap = HashMap<Vec<u8>, Stats>;

/// Upper bound on distinct station names, used to presize the maps.
pub(crate) const EXPECTED_STATIONS: usize = 10_000;

/// Scans one line-aligned segment into a local aggregate map.
///
/// Single-threaded over exclusively-owned state, so no synchronization
/// appears anywhere on this path. Lines are processed in file order.
pub fn scan_segment(segment: &[u8]) -> StatsMap {
    let mut stations = StatsMap::with_capacity(EXPECTED_STATIONS);
    for line in Lines::new(segment) {
        let (name, value) = split_record(line);
        let temp = parse_temperature(value);
        stations.entry_ref(name).or_default().update(temp);
    }
    stations
}

/// Folds all per-segment maps into a single merged map.
///
/// The first map's storage becomes the accumulator, so the common case adds
/// no extra allocation. `Stats::merge` is associative and commutative in
/// effect, which makes the result independent of fold order.
pub fn merge_maps(maps: Vec<StatsMap>) -> StatsMap {
    let mut maps = maps.into_iter();
    let mut merged = maps.next().unwrap_or_default();
    for map in maps {
        for (name, stats) in map {
            merged.entry(name).or_default().merge(&stats);
        }
    }
    merged
}
