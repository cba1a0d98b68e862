use std::fmt::Write;

use crate::{aggregate::StatsMap, BrcError};

/// Renders the merged map as the final one-line summary.
///
/// Entries are sorted by name in byte-lexicographic order and formatted as
/// `{name1=min1/avg1/max1, name2=min2/avg2/max2}`, each statistic with one
/// decimal place. A map with zero entries is refused as `EmptyInput` rather
/// than rendered.
pub fn render_report(stations: &StatsMap) -> crate::Result<String> {
    if stations.is_empty() {
        return Err(BrcError::EmptyInput);
    }

    let mut sorted: Vec<_> = stations.iter().collect();
    sorted.sort_unstable_by_key(|&(name, _)| name);

    let mut report = String::with_capacity(32 * sorted.len());
    report.push('{');
    for (i, (name, stats)) in sorted.into_iter().enumerate() {
        if i > 0 {
            report.push_str(", ");
        }
        let name = String::from_utf8_lossy(name);
        write!(report, "{name}={stats}").expect("writing to a String never fails");
    }
    report.push('}');

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::scan_segment;

    #[test]
    fn test_report_matches_reference_layout() {
        let map = scan_segment(b"Hamburg;12.0\nHamburg;8.0\nPalermo;-3.5\n");

        let report = render_report(&map).unwrap();
        assert_eq!(report, "{Hamburg=8.0/10.0/12.0, Palermo=-3.5/-3.5/-3.5}");
    }

    #[test]
    fn test_report_single_entry_has_no_separator() {
        let map = scan_segment(b"Oslo;0.0\n");

        assert_eq!(render_report(&map).unwrap(), "{Oslo=0.0/0.0/0.0}");
    }

    #[test]
    fn test_report_sorts_names_byte_lexicographically() {
        // Uppercase sorts before lowercase, multi-byte UTF-8 after ASCII.
        let map = scan_segment("ab;1.0\nZan;1.0\n\u{d8}rsta;1.0\n".as_bytes());

        let report = render_report(&map).unwrap();
        assert_eq!(
            report,
            "{Zan=1.0/1.0/1.0, ab=1.0/1.0/1.0, \u{d8}rsta=1.0/1.0/1.0}"
        );
    }

    #[test]
    fn test_report_refuses_empty_map() {
        let result = render_report(&StatsMap::new());
        assert!(matches!(result, Err(BrcError::EmptyInput)));
    }
}
