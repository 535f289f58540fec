use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pepcut_digest::{reconstruct_from_ordered, validate_ordered_fragments, Protease};

fn random_protein(len: usize) -> String {
    let residues = b"ACDEFGHIKLMNPQRSTVWY";
    let mut seq = String::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(residues[((state >> 33) % 20) as usize] as char);
    }
    seq
}

fn bench_cleave(c: &mut Criterion) {
    let mut group = c.benchmark_group("cleave");

    for len in [1_000, 100_000] {
        let seq = random_protein(len);
        let trypsin = Protease::trypsin();
        group.bench_with_input(BenchmarkId::new("trypsin", len), &seq, |b, seq| {
            b.iter(|| trypsin.cleave(black_box(seq)))
        });
        let chymotrypsin = Protease::chymotrypsin();
        group.bench_with_input(BenchmarkId::new("chymotrypsin", len), &seq, |b, seq| {
            b.iter(|| chymotrypsin.cleave(black_box(seq)))
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let trypsin = Protease::trypsin();
    let fragments = trypsin.cleave(&random_protein(100_000));
    group.bench_function("trypsin_100k", |b| {
        b.iter(|| {
            validate_ordered_fragments(
                black_box(&fragments),
                &trypsin.rule.cut_after,
                Some(&trypsin.rule.block_if_next),
            )
        })
    });
    group.bench_function("reconstruct_100k", |b| {
        b.iter(|| reconstruct_from_ordered(black_box(&fragments)))
    });

    group.finish();
}

criterion_group!(benches, bench_cleave, bench_validate);
criterion_main!(benches);
