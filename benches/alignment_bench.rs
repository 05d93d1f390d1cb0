use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use synopsis::alignment::{align_pair, PairwiseAligner, Scoring, StarAligner};
use synopsis::Document;

const WORDS: &[&str] = &[
    "the", "planet", "mars", "is", "red", "and", "cold", "with", "thin", "air", "dust", "storms",
];

fn generate_text(rng: &mut StdRng, length: usize) -> String {
    let mut text = String::with_capacity(length + 8);
    while text.chars().count() < length {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(WORDS[rng.gen_range(0..WORDS.len())]);
    }
    text.chars().take(length).collect()
}

/// Copies `text` with OCR-like noise: substitutions, drops and insertions.
fn add_noise(rng: &mut StdRng, text: &str, rate: f64) -> String {
    let mut noisy = String::with_capacity(text.len());
    for c in text.chars() {
        if !rng.gen_bool(rate) {
            noisy.push(c);
            continue;
        }
        match rng.gen_range(0..3) {
            0 => noisy.push(char::from(b'a' + rng.gen_range(0..26u8))),
            1 => {}
            _ => {
                noisy.push(c);
                noisy.push(char::from(b'a' + rng.gen_range(0..26u8)));
            }
        }
    }
    noisy
}

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise");
    let mut rng = StdRng::seed_from_u64(42);

    for length in [100, 500, 1000, 2000].iter() {
        let truth = generate_text(&mut rng, *length);
        let noisy = add_noise(&mut rng, &truth, 0.05);
        group.throughput(Throughput::Elements((*length * *length) as u64));

        group.bench_with_input(BenchmarkId::new("default", length), length, |b, _| {
            b.iter(|| align_pair(black_box(&truth), black_box(&noisy), &Scoring::default()))
        });
        group.bench_with_input(BenchmarkId::new("lcs", length), length, |b, _| {
            b.iter(|| align_pair(black_box(&truth), black_box(&noisy), &Scoring::LCS))
        });
    }

    group.finish();
}

fn bench_star(c: &mut Criterion) {
    let mut group = c.benchmark_group("star");
    group.sample_size(10);
    let mut rng = StdRng::seed_from_u64(7);
    let truth = generate_text(&mut rng, 1000);

    for count in [4, 8, 16].iter() {
        let documents: Vec<Document> = (0..*count)
            .map(|i| Document::new(format!("page_{}.txt", i), add_noise(&mut rng, &truth, 0.08)))
            .collect();

        for parallel in [false, true] {
            let aligner = StarAligner::new(PairwiseAligner::default()).with_parallel(parallel);
            let name = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(name, count), count, |b, _| {
                b.iter(|| aligner.align(black_box(&documents)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_pairwise, bench_star);
criterion_main!(benches);
