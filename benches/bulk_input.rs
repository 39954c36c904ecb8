use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use wineform::bulk_input::parse_bulk_input;
use wineform::chart::{accuracy_slices, pie_segments, segment_at_angle};

const ROWS: &[(&str, &str)] = &[
    (
        "compact",
        "7.4,0.7,0,1.9,0.076,11,34,0.9978,3.51,0.56,9.4",
    ),
    (
        "spaced",
        "  7.4 , 0.70 , 0.00 , 1.9 , 0.076 , 11 , 34 , 0.9978 , 3.51 , 0.56 , 9.4  ",
    ),
    ("wrong_count", "7.4, 0.7, 0.0, 1.9, 0.076"),
];

fn bench_parse_bulk_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_bulk_input");
    for (name, row) in ROWS {
        group.bench_with_input(BenchmarkId::from_parameter(name), row, |b, row| {
            b.iter(|| {
                let _ = black_box(parse_bulk_input(black_box(row)));
            })
        });
    }
    group.finish();
}

fn bench_pie_hit_test(c: &mut Criterion) {
    let slices = accuracy_slices(0.8731);
    let segments = pie_segments(&slices);
    c.bench_function("pie_segment_at_angle", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for step in 0..360 {
                let angle = (step as f32).to_radians();
                if segment_at_angle(black_box(&segments), angle).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_parse_bulk_input, bench_pie_hit_test);
criterion_main!(benches);
