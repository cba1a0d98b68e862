use std::{path::Path, thread};

use tracing::debug;

use crate::{
    aggregate::{merge_maps, scan_segment, StatsMap},
    mmap::MmapSource,
    report::render_report,
    segment::split_segments,
};

/// Runs one worker thread per segment and returns the local maps in segment
/// order.
///
/// `num_threads == 0` means one worker per available core; explicit values
/// are capped at the host core count. All workers are spawned before any is
/// joined, share the source buffer read-only, and exclusively own their maps
/// until the join hands them back. Within a segment, records are folded in
/// file order; across segments no ordering exists, and none is needed since
/// merging is order-independent. A panicking worker (a parse contract
/// violation) fails the whole run; no partial result survives.
pub fn aggregate_parallel(source: &MmapSource, num_threads: usize) -> Vec<StatsMap> {
    let num_threads = if num_threads == 0 {
        num_cpus::get()
    } else {
        num_threads.min(num_cpus::get())
    };

    let segments = split_segments(source.as_bytes(), num_threads);
    debug!(num_threads, bytes = source.len(), "scanning segments");

    let mut handles = Vec::with_capacity(segments.len());
    for segment in segments {
        let source = source.clone();
        handles.push(thread::spawn(move || {
            scan_segment(&source.as_bytes()[segment])
        }));
    }

    handles
        .into_iter()
        .map(|handle| handle.join().expect("worker thread panicked"))
        .collect()
}

/// The whole pipeline for one input file: map, scan in parallel, merge,
/// render the report.
pub fn summarize_path<P: AsRef<Path>>(path: P, num_threads: usize) -> crate::Result<String> {
    let source = MmapSource::new(path)?;
    let locals = aggregate_parallel(&source, num_threads);
    let merged = merge_maps(locals);
    render_report(&merged)
}
