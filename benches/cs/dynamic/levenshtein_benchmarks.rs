use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use namedist::{levenshtein_distance, EditDistance, LevenshteinDistance};

const NAMES: &[&str] = &[
    "Johnson",
    "Jonsson",
    "Katherine",
    "Catharina",
    "Smith",
    "Smyth",
    "MacDonald",
    "McDonnell",
    "Wolfeschlegelsteinhausenbergerdorff",
    "Wolfeschlegelsteinhausen",
];

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein_names");

    group.bench_function(BenchmarkId::new("reused_engine", NAMES.len()), |b| {
        let mut lev = LevenshteinDistance::new();
        b.iter(|| {
            for a in NAMES {
                for other in NAMES {
                    black_box(lev.get(black_box(a), black_box(other), true).unwrap());
                }
            }
        });
    });

    group.bench_function(BenchmarkId::new("fresh_engine", NAMES.len()), |b| {
        b.iter(|| {
            for a in NAMES {
                for other in NAMES {
                    let mut lev = LevenshteinDistance::new();
                    black_box(lev.get(black_box(a), black_box(other), true).unwrap());
                }
            }
        });
    });

    group.bench_function(BenchmarkId::new("stateless", NAMES.len()), |b| {
        b.iter(|| {
            for a in NAMES {
                for other in NAMES {
                    black_box(levenshtein_distance(
                        &black_box(a).to_lowercase(),
                        &black_box(other).to_lowercase(),
                    ));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_levenshtein);
criterion_main!(benches);
