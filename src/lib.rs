//! # brc - Parallel Min/Mean/Max Aggregation of Measurement Files
//!
//! `brc` computes, for a very large text file of `<name>;<value>` lines, the
//! per-station minimum, mean, and maximum temperature, as fast as the machine
//! allows: the file is memory-mapped, divided into line-aligned segments, and
//! scanned by one worker thread per segment with a fixed-point fast-path
//! parser; the per-worker maps are merged and rendered as one sorted report.
//!
//! ## Input Format
//!
//! Each line is `<name>;<value>\n`, where `name` is a non-empty UTF-8 station
//! name (no `;`) and `value` is a temperature of the form `-?d{1,2}.d`, i.e.
//! roughly ±100.0 with exactly one fractional digit. The format is assumed
//! well-formed; values accumulate as scaled integers (tenths), so results
//! carry no floating-point accumulation error. A final line lacking its
//! terminator is ignored.
//!
//! ## Usage
//!
//! The whole pipeline in one call (`0` workers means one per core):
//!
//! ```rust,no_run
//! # fn main() -> brc::Result<()> {
//! let report = brc::summarize_path("measurements.txt", 0)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! The components compose individually as well, which is what the tests and
//! benchmarks do:
//!
//! ```rust
//! use brc::{merge_maps, render_report, scan_segment, split_segments};
//!
//! # fn main() -> brc::Result<()> {
//! let data = b"Hamburg;12.0\nHamburg;8.0\nPalermo;-3.5\n";
//!
//! let locals: Vec<_> = split_segments(data, 2)
//!     .into_iter()
//!     .map(|segment| scan_segment(&data[segment]))
//!     .collect();
//! let merged = merge_maps(locals);
//!
//! assert_eq!(
//!     render_report(&merged)?,
//!     "{Hamburg=8.0/10.0/12.0, Palermo=-3.5/-3.5/-3.5}"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency Model
//!
//! A single fan-out/fan-in: the segments partition the buffer exactly, every
//! worker owns its local map until the join hands it back, and the mapped
//! buffer is shared read-only. No lock or atomic appears anywhere on the hot
//! path; the only blocking point is the final join. Merging is associative
//! and commutative, so the report is byte-identical for any worker count.
//!
//! ## The Baseline
//!
//! [`aggregate_serial`] is the deliberately simple version of the same
//! computation (buffered reads, generic float parsing, one thread). It exists
//! as a correctness oracle and performance baseline, and ships as the
//! `baseline` binary next to the main `brc` one.
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result`] with [`BrcError`]; every failure is
//! terminal for the run. An input with no complete record at all reports
//! [`BrcError::EmptyInput`] rather than rendering an empty summary.

mod aggregate;
mod baseline;
mod error;
mod mmap;
mod parallel;
mod parse;
mod report;
mod segment;
mod stats;

pub use aggregate::{merge_maps, scan_segment, StatsMap};
pub use baseline::aggregate_serial;
pub use error::{BrcError, Result};
pub use mmap::MmapSource;
pub use parallel::{aggregate_parallel, summarize_path};
pub use parse::{parse_temperature, split_record, SEPARATOR};
pub use report::render_report;
pub use segment::{split_segments, Lines};
pub use stats::Stats;
