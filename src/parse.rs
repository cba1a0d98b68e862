use memchr::memchr;

/// Separator between the station name and the temperature on every line.
pub const SEPARATOR: u8 = b';';

/// Splits one line at the first separator byte into `(name, value)` slices.
///
/// Well-formed input always carries the separator; a line without one is
/// outside the supported format and panics, which fails the whole run.
pub fn split_record(line: &[u8]) -> (&[u8], &[u8]) {
    let sep = memchr(SEPARATOR, line).expect("record line missing ';' separator");
    (&line[..sep], &line[sep + 1..])
}

/// Decodes a temperature of the form `-?d{1,2}.d` into tenths of a degree.
///
/// Pure digit arithmetic over the two supported shapes, no allocation, no
/// generic string-to-number conversion. Behavior is defined only for
/// conforming input; anything else panics.
pub fn parse_temperature(value: &[u8]) -> i16 {
    let (sign, digits) = match value {
        [b'-', digits @ ..] => (-1, digits),
        _ => (1, value),
    };
    let scaled = match digits {
        [d, b'.', f] => 10 * i16::from(d - b'0') + i16::from(f - b'0'),
        [d, e, b'.', f] => {
            100 * i16::from(d - b'0') + 10 * i16::from(e - b'0') + i16::from(f - b'0')
        }
        _ => panic!("temperature not in d.d or dd.d form"),
    };
    sign * scaled
}
