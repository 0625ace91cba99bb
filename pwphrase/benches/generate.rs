use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pwphrase::{CharPools, ClassCounts, PasswordConfig, generate, sample};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Phrase lengths spanning the allowed range.
const PHRASE_LENGTHS: &[usize] = &[4, 6, 12, 25];

fn bench_default_password(c: &mut Criterion) {
    let config = PasswordConfig::default();
    // Fixed seed for reproducible benchmark results
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("generate_default", |b| {
        b.iter(|| black_box(generate(black_box(&config), &mut rng).unwrap()))
    });
}

fn bench_thread_rng(c: &mut Criterion) {
    let config = PasswordConfig::builder().exclude_ambiguous(true).build().unwrap();
    let mut rng = rand::thread_rng();

    c.bench_function("generate_thread_rng_unambiguous", |b| {
        b.iter(|| black_box(generate(black_box(&config), &mut rng).unwrap()))
    });
}

fn bench_phrase_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_three_phrases");
    let pools = CharPools::new(false);
    let mut rng = StdRng::seed_from_u64(42);

    for &length in PHRASE_LENGTHS {
        let config = PasswordConfig::builder().phrase_length(length).build().unwrap();
        let counts = ClassCounts::from_config(&config).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(length), &counts, |b, counts| {
            b.iter(|| black_box(sample(&pools, counts, &mut rng).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_default_password, bench_thread_rng, bench_phrase_lengths);
criterion_main!(benches);
