use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use baca::prelude::*;

// ---------------------------------------------------------------------------------------------

fn create_collections() -> Vec<PitchCollection> {
    (0..24)
        .map(|index| {
            let pitch_classes = [0, 2, 3, 7, 9, 11]
                .into_iter()
                .map(|number| PitchClass::from(number + index * 5))
                .collect::<PitchClassSegment>();
            PitchCollection::from(pitch_classes)
        })
        .collect()
}

pub fn space(c: &mut Criterion) {
    let mut group = c.benchmark_group("Spacing");
    let collections = create_collections();
    let up = ChordalSpacingSpecifier::new();
    let down = ChordalSpacingSpecifier::new().with_direction(Direction::Down);
    group.bench_function("Space Up", |b| {
        b.iter(|| black_box(up.apply(&collections).unwrap()))
    });
    group.bench_function("Space Down", |b| {
        b.iter(|| black_box(down.apply(&collections).unwrap()))
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group!(spacing, space);
