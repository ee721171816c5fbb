use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geocell::interleave::{deinterleave, interleave};
use geocell::{Code, GeoEncoder, decode, encode, neighbors};

fn benchmark_interleave(c: &mut Criterion) {
    let mut group = c.benchmark_group("interleave");

    group.bench_function("interleave", |b| {
        b.iter(|| interleave(black_box(49305048), black_box(17502756)))
    });

    group.bench_function("deinterleave", |b| {
        b.iter(|| deinterleave(black_box(1782901374540128)))
    });

    group.finish();
}

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for step in [8u16, 16, 26, 32] {
        group.bench_with_input(BenchmarkId::new("encode", step), &step, |b, &step| {
            b.iter(|| encode(black_box(-86.1078998), black_box(39.923422), step).unwrap())
        });

        let code = encode(-86.1078998, 39.923422, step).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", step), &code, |b, &code| {
            b.iter(|| decode(black_box(code)).unwrap())
        });
    }

    let encoder = GeoEncoder::wgs84();
    group.bench_function("encoder_encode_sweep", |b| {
        let mut counter = 0u32;
        b.iter(|| {
            let lat = 40.7128 + ((counter % 1000) as f64 * 0.001);
            let lon = -74.0060 + ((counter % 1000) as f64 * 0.001);
            counter = counter.wrapping_add(1);
            encoder.encode(black_box(lon), black_box(lat)).unwrap()
        })
    });

    group.finish();
}

fn benchmark_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    let code = Code::new(1782901374540128, 26);
    group.bench_function("neighbors_step_26", |b| {
        b.iter(|| neighbors(black_box(code)).unwrap())
    });

    let full = Code::new(u64::MAX, 32);
    group.bench_function("neighbors_step_32_edge", |b| {
        b.iter(|| neighbors(black_box(full)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_interleave,
    benchmark_codec,
    benchmark_neighbors
);
criterion_main!(benches);
