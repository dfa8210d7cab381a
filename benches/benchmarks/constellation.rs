use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use baca::prelude::*;

// ---------------------------------------------------------------------------------------------

fn create_circuit() -> ConstellationCircuit {
    ConstellationCircuit::with_default_range(vec![
        vec![vec![-12, -10, 4], vec![-2, 8, 11, 17], vec![19, 27, 30, 33, 37]],
        vec![vec![-12, -10, -8], vec![-5, 4, 8, 11], vec![20, 27, 30, 33, 37]],
        vec![vec![-8, 2, 15, 25], vec![-1, 20, 29, 31], vec![0, 10, 21, 42]],
        vec![vec![-8, 2, 10, 21], vec![0, 11, 32, 41], vec![15, 25, 42, 44]],
    ])
}

pub fn create(c: &mut Criterion) {
    let mut group = c.benchmark_group("Constellation");
    group.bench_function("Create Circuit", |b| b.iter(|| black_box(create_circuit())));
    group.finish();
}

pub fn lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("Constellation");
    let circuit = create_circuit();
    group.bench_function("Chord Numbers", |b| {
        b.iter(|| {
            for constellation in circuit.iter() {
                let chord = constellation.chords()[constellation.len() / 2].clone();
                black_box(constellation.get_number_of_chord(chord).unwrap());
            }
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = constellation;
    config = Criterion::default().sample_size(50);
    targets = create, lookup
}
