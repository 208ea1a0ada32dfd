use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_chart::{BirthInput, ChartOptions, compute_chart};
use kundali_ephemeris::Resolver;
use kundali_vedic_base::DashaOptions;

fn chart_bench(c: &mut Criterion) {
    let input = BirthInput::parse("1990-05-15", "10:30", 28.6139, 77.2090).unwrap();
    let birth = input.julian_day();
    let resolver = Resolver::fallback_only();
    let mut group = c.benchmark_group("chart");

    let options = ChartOptions::default().with_reference(birth.add_days(10_000.0));
    group.bench_function("fallback_default", |b| {
        b.iter(|| compute_chart(black_box(&input), &options, &resolver))
    });

    let shallow = ChartOptions {
        dasha: DashaOptions { max_level: 0, cycles: 1 },
        vargas: Vec::new(),
        ..options.clone()
    };
    group.bench_function("fallback_minimal", |b| {
        b.iter(|| compute_chart(black_box(&input), &shallow, &resolver))
    });

    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
