// Criterion benchmarks for Tandem Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tandem_match::core::{count_candidates, full_match, pair_all};
use tandem_match::models::Participant;

const LANGUAGES: &[&str] = &[
    "English", "French", "German", "Spanish", "Italian", "Portuguese", "Japanese", "Korean",
    "Polish", "Dutch",
];

fn create_participant(id: usize) -> Participant {
    let native = LANGUAGES[id % LANGUAGES.len()];
    let practice = LANGUAGES[(id + 3) % LANGUAGES.len()];
    let advanced = LANGUAGES[(id + 5) % LANGUAGES.len()];

    Participant {
        name: format!("Person {}", id),
        practice: [practice.to_string()].into_iter().collect(),
        native: [native.to_string()].into_iter().collect(),
        advanced: if id % 4 == 0 {
            [advanced.to_string()].into_iter().collect()
        } else {
            Default::default()
        },
        only_native: id % 7 == 0,
        email: format!("person{}@example.com", id),
        facebook: String::new(),
    }
}

fn create_roster(size: usize) -> Vec<Participant> {
    (0..size).map(create_participant).collect()
}

fn bench_full_match(c: &mut Criterion) {
    let a = create_participant(1);
    let b = create_participant(8);

    c.bench_function("full_match", |bencher| {
        bencher.iter(|| full_match(black_box(&a), black_box(&b)));
    });
}

fn bench_count_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_candidates");
    for size in [50, 100, 200] {
        let roster = create_roster(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |bencher, roster| {
            bencher.iter(|| count_candidates(black_box(roster)));
        });
    }
    group.finish();
}

fn bench_pair_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_all");
    for size in [50, 100, 200] {
        let roster = create_roster(size);
        let counts = count_candidates(&roster);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(roster, counts),
            |bencher, (roster, counts)| {
                bencher.iter(|| pair_all(black_box(roster), black_box(counts)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_full_match, bench_count_candidates, bench_pair_all);
criterion_main!(benches);
