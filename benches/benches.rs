use criterion::criterion_main;

// ---------------------------------------------------------------------------------------------

mod benchmarks;

// ---------------------------------------------------------------------------------------------

criterion_main!(
    benchmarks::constellation::constellation, //
    benchmarks::spacing::spacing,
);
