use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use byteutils_primitives::{BitByte, BitWord, ByteSequence, Word128, Word32};
use byteutils_tests::{mix_column, sub_byte};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_gf(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(2^8)");
    let a = BitByte::new(0x57);
    let b = BitByte::new(0x83);

    group.bench_function("gf_mul", |bench| {
        bench.iter(|| black_box(a) * black_box(b));
    });
    group.bench_function("gf_inverse", |bench| {
        bench.iter(|| black_box(a).gf_inverse());
    });
    group.bench_function("sub_byte", |bench| {
        bench.iter(|| sub_byte(black_box(a)));
    });
    group.bench_function("mix_column", |bench| {
        let column = Word32::from_u64(0xdb135345);
        bench.iter(|| mix_column(black_box(&column)));
    });

    group.finish();
}

fn bench_word_shifts(c: &mut Criterion) {
    let mut group = c.benchmark_group("BitWord shifts");
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let word = Word128::random(&mut rng);

    for n in [1usize, 8, 13, 64].iter() {
        group.bench_with_input(BenchmarkId::new("shift_left", n), n, |bench, &n| {
            bench.iter(|| black_box(&word).shift_left(n));
        });
        group.bench_with_input(BenchmarkId::new("shift_right", n), n, |bench, &n| {
            bench.iter(|| black_box(&word).shift_right(n));
        });
    }

    group.finish();
}

fn bench_wrapping_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("BitWord wrapping_add");
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let a4 = Word32::random(&mut rng);
    let b4 = Word32::random(&mut rng);
    group.bench_function("32-bit", |bench| {
        bench.iter(|| black_box(&a4).wrapping_add(black_box(&b4)));
    });

    let a32 = BitWord::<32>::random(&mut rng);
    let b32 = BitWord::<32>::random(&mut rng);
    group.bench_function("256-bit", |bench| {
        bench.iter(|| black_box(&a32).wrapping_add(black_box(&b32)));
    });

    group.finish();
}

fn bench_sequence_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("ByteSequence hex");

    for size in [16usize, 256, 4096].iter() {
        let text = "a5".repeat(*size);
        group.bench_with_input(BenchmarkId::new("from_hex", size), size, |bench, _| {
            bench.iter(|| ByteSequence::from_hex(black_box(&text)));
        });

        let bytes = ByteSequence::from(vec![0xa5u8; *size]);
        group.bench_with_input(BenchmarkId::new("to_hex", size), size, |bench, _| {
            bench.iter(|| black_box(&bytes).to_hex());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_gf,
    bench_word_shifts,
    bench_wrapping_add,
    bench_sequence_hex
);
criterion_main!(benches);
