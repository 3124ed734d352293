use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use switchyard_events::{EventBus, EventCategory, InMemoryEventBus, handler};

/// Bus with `n` counting handlers on `OrderPlaced`.
fn bus_with_subscribers(n: usize) -> (InMemoryEventBus<String>, Arc<AtomicU64>) {
    let bus = InMemoryEventBus::new();
    let hits = Arc::new(AtomicU64::new(0));
    for _ in 0..n {
        let hits = Arc::clone(&hits);
        bus.subscribe(
            EventCategory::OrderPlaced,
            handler(move |msg: &String| {
                hits.fetch_add(msg.len() as u64, Ordering::Relaxed);
            }),
        );
    }
    (bus, hits)
}

fn bench_publish_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish_fan_out");
    let payload = "Order ORD-001 for $299.99".to_string();

    for subscribers in [0usize, 1, 8, 64] {
        let (bus, _hits) = bus_with_subscribers(subscribers);
        group.throughput(Throughput::Elements(subscribers.max(1) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(subscribers),
            &subscribers,
            |b, _| {
                b.iter(|| {
                    bus.publish(EventCategory::OrderPlaced, black_box(&payload))
                        .map(|receipt| receipt.delivered)
                })
            },
        );
    }

    group.finish();
}

fn bench_subscribe(c: &mut Criterion) {
    c.bench_function("subscribe_1000_handlers", |b| {
        b.iter(|| {
            let (bus, _) = bus_with_subscribers(black_box(1000));
            bus.subscriber_count(EventCategory::OrderPlaced)
        })
    });
}

criterion_group!(benches, bench_publish_fan_out, bench_subscribe);
criterion_main!(benches);
