// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_banner::notification::{sort_actions, ActionStyle, NotifyAction};
use std::hint::black_box;

const STYLES: [ActionStyle; 5] = [
    ActionStyle::Default,
    ActionStyle::Cancel,
    ActionStyle::Destructive,
    ActionStyle::OnlyTextInput,
    ActionStyle::TextInput,
];

fn actions(len: usize) -> Vec<NotifyAction> {
    (0..len)
        .map(|i| NotifyAction::without_handler(format!("action {i}"), STYLES[i % STYLES.len()]))
        .collect()
}

fn action_sort_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("action_sort");

    for len in [4, 16, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            // Handlers are FnOnce, so every iteration sorts a fresh list.
            b.iter_batched(
                || actions(len),
                |list| black_box(sort_actions(list)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, action_sort_benchmark);
criterion_main!(benches);
