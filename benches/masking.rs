use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_forge::encoder::mask::{apply_mask, evaluate_candidates};
use qr_forge::encoder::penalty::score;
use qr_forge::{EncodeOptions, MaskPattern, encode_with_stages};

fn bench_apply_mask(c: &mut Criterion) {
    let stages = encode_with_stages(b"HELLO", &EncodeOptions::with_version(2)).unwrap();
    c.bench_function("apply_mask_v2", |b| {
        b.iter(|| apply_mask(black_box(&stages.data), &stages.reserved, MaskPattern::Pattern4))
    });
}

fn bench_penalty(c: &mut Criterion) {
    let stages = encode_with_stages(b"HELLO", &EncodeOptions::with_version(2)).unwrap();
    c.bench_function("penalty_score_v2", |b| b.iter(|| score(black_box(&stages.masked))));
}

fn bench_candidates_sequential(c: &mut Criterion) {
    let stages = encode_with_stages(b"HELLO", &EncodeOptions::with_version(2)).unwrap();
    c.bench_function("mask_candidates_v2_sequential", |b| {
        b.iter(|| evaluate_candidates(black_box(&stages.data), &stages.reserved, false))
    });
}

fn bench_candidates_parallel(c: &mut Criterion) {
    let stages = encode_with_stages(b"HELLO", &EncodeOptions::with_version(2)).unwrap();
    c.bench_function("mask_candidates_v2_parallel", |b| {
        b.iter(|| evaluate_candidates(black_box(&stages.data), &stages.reserved, true))
    });
}

criterion_group!(
    benches,
    bench_apply_mask,
    bench_penalty,
    bench_candidates_sequential,
    bench_candidates_parallel
);
criterion_main!(benches);
