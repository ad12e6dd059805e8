use criterion::{Criterion, criterion_group, criterion_main};
use dive_gas_blend::{
    BlendParameters,
    ead::{equivalent_air_depth, max_operating_depth},
    label::MixLabel,
    mix::{GasMix, MixRequest, best_mix},
    table::mix_table,
};

fn benchmark_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");
    let params = BlendParameters::default();

    // Benchmark the nitrox path
    group.bench_function("best_mix_nitrox", |b| {
        b.iter(|| best_mix(params, MixRequest::nitrox(30.0, 1.4)))
    });

    // Benchmark the trimix path
    group.bench_function("best_mix_trimix", |b| {
        b.iter(|| best_mix(params, MixRequest::trimix(50.0, 1.4, 30.0)))
    });

    group.finish();
}

fn benchmark_labeling(c: &mut Criterion) {
    let mut group = c.benchmark_group("labeling");
    let trimix = GasMix {
        fo2: 0.21,
        fhe: 0.35,
        fn2: 0.44,
    };
    let nitrox = GasMix {
        fo2: 0.32,
        fhe: 0.0,
        fn2: 0.68,
    };

    group.bench_function("label_trimix", |b| b.iter(|| MixLabel::for_mix(trimix)));
    group.bench_function("label_nitrox", |b| b.iter(|| MixLabel::for_mix(nitrox)));

    group.finish();
}

fn benchmark_exposure(c: &mut Criterion) {
    let mut group = c.benchmark_group("exposure");
    let params = BlendParameters::default();
    let ean32 = GasMix {
        fo2: 0.32,
        fhe: 0.0,
        fn2: 0.68,
    };

    group.bench_function("equivalent_air_depth", |b| {
        b.iter(|| equivalent_air_depth(params, ean32, 30.0))
    });

    group.bench_function("max_operating_depth", |b| {
        b.iter(|| max_operating_depth(params, 0.32, 1.4))
    });

    group.finish();
}

fn benchmark_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables");
    let params = BlendParameters::default();

    // A full recreational-range sweep per keystroke is the worst case the demo
    // planners put on the solver
    group.bench_function("mix_table_0_to_120m", |b| {
        b.iter(|| mix_table(params, 1.4, Some(30.0), 0.0, 120.0, 1.0))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_solver,
    benchmark_labeling,
    benchmark_exposure,
    benchmark_tables
);
criterion_main!(benches);
