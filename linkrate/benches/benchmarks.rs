use criterion::{criterion_group, criterion_main, Criterion};
use linkrate::LinkBudget;

fn shannon_limit(c: &mut Criterion) {
    let mut group = c.benchmark_group("Shannon limit");

    group.bench_function("2.4 GHz, 20 km", |b| {
        b.iter(|| {
            LinkBudget::<f64>::builder()
                .tx_power(10.0)
                .tx_gain(20.0)
                .freq(2.4e9)
                .distance(20.0)
                .rx_gain(15.0)
                .noise_density(1e-20)
                .bandwidth(1e7)
                .build()
                .unwrap()
                .max_bitrate()
                .unwrap()
        })
    });
}

criterion_group!(benches, shannon_limit);
criterion_main!(benches);
