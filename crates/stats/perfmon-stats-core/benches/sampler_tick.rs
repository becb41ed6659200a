use criterion::{black_box, criterion_group, criterion_main, Criterion};
use perfmon_stats_core::{FrameStatsSampler, MetricKind, SamplerConfig};

fn bench_sampler_tick(c: &mut Criterion) {
    let mut sampler = FrameStatsSampler::new(SamplerConfig::default()).expect("default config");
    let mut frame = 0u64;
    let mut src = move |kind: MetricKind| {
        frame += 1;
        match kind {
            MetricKind::Fps => 60.0 + (frame % 3) as f64,
            MetricKind::DrawTimeSeconds => 0.016,
            MetricKind::MemoryBytes => 1_000_000.0,
        }
    };
    c.bench_function("sampler_tick_1000_frames", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(sampler.on_frame_tick(&mut src));
            }
        })
    });
}

criterion_group!(benches, bench_sampler_tick);
criterion_main!(benches);
