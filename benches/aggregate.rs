use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

use brc::{merge_maps, parse_temperature, scan_segment, split_segments};

// Deterministic measurement data so runs stay comparable.
fn generate_measurements(lines: usize) -> Vec<u8> {
    const NAMES: [&str; 8] = [
        "Hamburg", "Palermo", "Oslo", "Jakarta", "Lima", "Accra", "Tokyo", "Quito",
    ];

    let mut rng = StdRng::seed_from_u64(42);
    let mut data = Vec::new();
    for _ in 0..lines {
        let name = NAMES[rng.random_range(0..NAMES.len())];
        let scaled: i32 = rng.random_range(-999..=999);
        let sign = if scaled < 0 { "-" } else { "" };
        let magnitude = scaled.unsigned_abs();
        data.extend_from_slice(
            format!("{name};{sign}{}.{}\n", magnitude / 10, magnitude % 10).as_bytes(),
        );
    }
    data
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("parse_temperature", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for value in [&b"0.0"[..], b"12.3", b"-5.7", b"-99.9", b"7.1"] {
                acc += i64::from(parse_temperature(black_box(value)));
            }
            acc
        });
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let data = generate_measurements(1_000_000);

    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("scan_segment", |b| {
        b.iter(|| scan_segment(black_box(&data)));
    });

    group.bench_function("scan_split_and_merge", |b| {
        b.iter(|| {
            let locals: Vec<_> = split_segments(&data, 8)
                .into_iter()
                .map(|segment| scan_segment(&data[segment]))
                .collect();
            merge_maps(locals)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_scan);
criterion_main!(benches);
