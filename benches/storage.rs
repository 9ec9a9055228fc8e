//! Array versus linked-list storage on the operations whose cost differs.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tabulated::{FunctionPoint, StorageKind, TabulatedFunction};

const SIZES: [usize; 3] = [16, 256, 4096];

fn build(kind: StorageKind, size: usize) -> Box<dyn TabulatedFunction> {
    let values: Vec<f64> = (0..size).map(|i| (i as f64).sin()).collect();
    kind.create_with_values(0.0, size as f64, &values)
        .expect("valid grid")
}

fn bench_value_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_at");
    for size in SIZES {
        for kind in StorageKind::ALL {
            let f = build(kind, size);
            let x = size as f64 * 0.75;
            group.bench_with_input(BenchmarkId::new(kind.to_string(), size), &x, |b, &x| {
                b.iter(|| f.value_at(black_box(x)))
            });
        }
    }
    group.finish();
}

fn bench_point_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("point");
    for size in SIZES {
        for kind in StorageKind::ALL {
            let f = build(kind, size);
            let index = size / 3;
            group.bench_with_input(
                BenchmarkId::new(kind.to_string(), size),
                &index,
                |b, &index| b.iter(|| f.point(black_box(index))),
            );
        }
    }
    group.finish();
}

fn bench_add_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_then_delete");
    for size in SIZES {
        for kind in StorageKind::ALL {
            let mut f = build(kind, size);
            let x = size as f64 / 2.0 + 0.5;
            let index = f.iter().take_while(|p| p.x < x).count();
            group.bench_function(BenchmarkId::new(kind.to_string(), size), |b| {
                b.iter(|| {
                    f.add_point(FunctionPoint::new(black_box(x), 1.0))
                        .expect("free slot");
                    f.delete_point(index).expect("inserted point");
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_value_at, bench_point_access, bench_add_delete);
criterion_main!(benches);
