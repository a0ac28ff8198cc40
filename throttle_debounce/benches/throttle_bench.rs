use std::hint::black_box;
use std::time::Duration;

use criterion::BatchSize;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use throttle_debounce::throttle_with_debounce;

fn bench_immediate_path(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_multi_thread().enable_time().build().unwrap();
    let _guard = rt.enter();

    c.bench_function("immediate_path", |b| {
        b.iter_batched(
            || throttle_with_debounce(|v: u64| { black_box(v); }, Duration::from_secs(3600)),
            |throttled| throttled.call(black_box(1)),
            BatchSize::SmallInput,
        );
    });
}

fn bench_suppressed_path(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_multi_thread().enable_time().build().unwrap();
    let _guard = rt.enter();

    c.bench_function("suppressed_path", |b| {
        // Open the window once; every benched call then cancels and
        // reschedules the trailing timer.
        let throttled = throttle_with_debounce(|v: u64| { black_box(v); }, Duration::from_secs(3600));
        throttled.call(0);

        b.iter(|| throttled.call(black_box(1)));
    });
}

criterion_group!(benches, bench_immediate_path, bench_suppressed_path);
criterion_main!(benches);
