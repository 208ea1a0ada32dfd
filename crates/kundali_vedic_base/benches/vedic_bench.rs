use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_vedic_base::{
    Amsha, ContributorPositions, DashaIter, DashaOptions, VargaScheme, ascendant_from_lst,
    ashtakavarga, dasha_hierarchy, dasha_snapshot, varga_from_longitude,
};

fn varga_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("varga");
    group.bench_function("d9_harmonic", |b| {
        b.iter(|| varga_from_longitude(black_box(lon), Amsha::D9, VargaScheme::Harmonic))
    });
    group.bench_function("d9_parashari", |b| {
        b.iter(|| varga_from_longitude(black_box(lon), Amsha::D9, VargaScheme::Parashari))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth_jd = 2_447_892.5;
    let moon = 211.75;
    let opts = DashaOptions::default();

    let mut group = c.benchmark_group("dasha");
    group.bench_function("hierarchy_level2", |b| {
        b.iter(|| dasha_hierarchy(black_box(birth_jd), black_box(moon), &opts))
    });
    group.bench_function("snapshot_level4", |b| {
        let deep = DashaOptions { max_level: 4, cycles: 1 };
        b.iter(|| dasha_snapshot(black_box(birth_jd), moon, birth_jd + 12_000.0, &deep))
    });
    group.bench_function("iter_level3_count", |b| {
        let opts = DashaOptions { max_level: 3, cycles: 1 };
        b.iter(|| {
            DashaIter::new(black_box(birth_jd), moon, &opts)
                .map(|it| it.count())
                .unwrap_or(0)
        })
    });
    group.finish();
}

fn chart_primitives_bench(c: &mut Criterion) {
    let positions = ContributorPositions::new([4, 8, 1, 12, 6, 10, 3], 1).unwrap();

    let mut group = c.benchmark_group("chart_primitives");
    group.bench_function("ashtakavarga", |b| b.iter(|| ashtakavarga(black_box(&positions))));
    group.bench_function("ascendant_from_lst", |b| {
        b.iter(|| ascendant_from_lst(black_box(217.3), black_box(28.6)))
    });
    group.finish();
}

criterion_group!(benches, varga_bench, dasha_bench, chart_primitives_bench);
criterion_main!(benches);
