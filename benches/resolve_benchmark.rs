//! Performance benchmarks for hit resolution
//!
//! Compares exact lookups against nearest-color scans as the number of
//! registered areas grows.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use imagemap::color::{cie94, Rgb};
use imagemap::geometry::{Point, Size};
use imagemap::registry::{registry_for, AreaRegistry, MatchMode};
use imagemap::Area;

/// Registry with `count` areas on evenly spread keys.
fn populated(mode: MatchMode, count: u32) -> Box<dyn AreaRegistry> {
    let mut registry = registry_for(mode);
    for i in 0..count {
        let key = Rgb::from_u32(i.wrapping_mul(0x0097_3A1F) & 0x00FF_FFFF);
        let area = Area::new(format!("area {}", i), key, Point::new(0, 0), Size::new(8, 8));
        // Spread keys can still collide; exact registries reject those
        let _ = registry.add(area);
    }
    registry
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let probe = Rgb::new(120, 64, 200);

    for count in [4u32, 16, 64, 256].iter() {
        group.throughput(Throughput::Elements(1));

        let exact = populated(MatchMode::Exact, *count);
        group.bench_with_input(BenchmarkId::new("exact", count), count, |b, _| {
            b.iter(|| exact.resolve(black_box(probe), black_box(0.0)))
        });

        let nearest = populated(MatchMode::Nearest, *count);
        group.bench_with_input(BenchmarkId::new("nearest", count), count, |b, _| {
            b.iter(|| nearest.resolve(black_box(probe), black_box(25.0)))
        });
    }

    group.finish();
}

fn bench_cie94(c: &mut Criterion) {
    c.bench_function("cie94_pair", |b| {
        b.iter(|| cie94(black_box(Rgb::CYAN), black_box(Rgb::LIGHT_CYAN)))
    });
}

criterion_group!(benches, bench_resolve, bench_cie94);
criterion_main!(benches);
