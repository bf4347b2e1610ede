use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cim_category::{find_paths, Category, MathObject, Morphism};

/// Grid of `size × size` objects with right and down arrows
fn grid(size: usize) -> Category {
    let mut category = Category::new(format!("grid_{}", size));
    for row in 0..size {
        for col in 0..size {
            let id = format!("{}_{}", row, col);
            category
                .add_object(MathObject::new(id.clone(), id))
                .expect("fresh object");
        }
    }
    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                category
                    .add_morphism(Morphism::new(
                        format!("r_{}_{}", row, col),
                        format!("{}_{}", row, col),
                        format!("{}_{}", row, col + 1),
                        "right",
                    ))
                    .expect("valid edge");
            }
            if row + 1 < size {
                category
                    .add_morphism(Morphism::new(
                        format!("d_{}_{}", row, col),
                        format!("{}_{}", row, col),
                        format!("{}_{}", row + 1, col),
                        "down",
                    ))
                    .expect("valid edge");
            }
        }
    }
    category
}

fn benchmark_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");

    group.bench_function("memoized_hit", |b| {
        let category = grid(3);
        category.compose("r_0_0", "r_0_1").expect("composable");
        b.iter(|| black_box(category.compose("r_0_0", "r_0_1").expect("composable")));
    });

    for size in [3, 4, 5].iter() {
        group.bench_with_input(BenchmarkId::new("verify", size), size, |b, &size| {
            let category = grid(size);
            b.iter(|| black_box(category.verify()));
        });
    }

    group.finish();
}

fn benchmark_path_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_paths");

    for size in [3, 4, 5].iter() {
        group.bench_with_input(BenchmarkId::new("corner_to_corner", size), size, |b, &size| {
            let category = grid(size);
            let target = format!("{}_{}", size - 1, size - 1);
            b.iter(|| black_box(find_paths(&category, "0_0", &target, 2 * size)));
        });
    }

    group.bench_function("diagram_commutes_4x4", |b| {
        let category = grid(4);
        let paths = find_paths(&category, "0_0", "3_3", 6);
        b.iter(|| black_box(category.diagram_commutes(&paths).expect("paths compose")));
    });

    group.finish();
}

criterion_group!(benches, benchmark_composition, benchmark_path_enumeration);
criterion_main!(benches);
