use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scatter_core::record::{Record, XField};
use scatter_core::x_scale;

fn gen_records(n: usize) -> Vec<Record> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64;
        v.push(Record {
            state: format!("State {i}"),
            abbr: format!("S{i}"),
            poverty: 10.0 + (t * 0.13).sin() * 8.0,
            age: 35.0 + (t * 0.07).cos() * 6.0,
            income: 45000.0 + (t * 0.01).sin() * 20000.0,
            obesity: 28.0 + (t * 0.05).sin() * 7.0,
            smokes: 17.0 + (t * 0.09).cos() * 5.0,
            healthcare: 11.0 + (t * 0.03).sin() * 6.0,
        });
    }
    v
}

fn bench_scale_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_build");
    for &n in &[50usize, 1_000usize, 50_000usize] {
        let records = gen_records(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, recs| {
            b.iter(|| {
                let s = x_scale(black_box(recs), XField::Income, 824.0);
                black_box(s.position(50000.0));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scale_build);
criterion_main!(benches);
