use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hkweather::{distance_km, find_nearest, LatLon, StationCatalog};

fn bench_resolver(c: &mut Criterion) {
    let catalog = StationCatalog::hong_kong();
    let names: Vec<&str> = catalog.names().collect();
    let target = LatLon(22.294, 114.172);

    c.bench_function("distance_km", |b| {
        b.iter(|| {
            distance_km(
                black_box(LatLon(22.302, 114.174)),
                black_box(LatLon(22.309, 114.172)),
            )
        })
    });
    c.bench_function("find_nearest", |b| {
        b.iter(|| find_nearest(black_box(target), names.iter().copied(), &catalog))
    });
}

criterion_group!(benches, bench_resolver);
criterion_main!(benches);
