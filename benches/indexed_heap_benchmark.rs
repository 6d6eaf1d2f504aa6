use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphwalk::collections::IndexedMinHeap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn bench_indexed_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap");

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000u32 {
                heap.push(Reverse((i * 7919) % 1000));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("indexed_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = IndexedMinHeap::with_capacity(1000);
            for i in 0..1000u32 {
                heap.push(i, f64::from((i * 7919) % 1000));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    // Dijkstra's access pattern: every key is lowered once before draining.
    group.bench_function("indexed_heap_decrease_key", |b| {
        b.iter(|| {
            let mut heap = IndexedMinHeap::with_capacity(1000);
            for i in 0..1000u32 {
                heap.push(i, 1000.0);
            }
            for i in 0..1000u32 {
                heap.decrease_key(&i, f64::from((i * 7919) % 1000));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_indexed_heap);
criterion_main!(benches);
