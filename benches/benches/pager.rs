// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_pager::{
    CircularPager, FixedPageSource, PageContainer, PageEvent, PaddedLayout, ScrollState,
};

struct Strip(usize);

impl PageContainer for Strip {
    fn current_position(&self) -> usize {
        self.0
    }

    fn set_current_position(&mut self, position: usize, _animated: bool) {
        self.0 = position;
    }
}

fn bench_to_real(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/to_real");

    for extra in [1usize, 2, 8, 64] {
        let layout = PaddedLayout::new(32, extra);
        group.throughput(Throughput::Elements(layout.count() as u64));
        group.bench_with_input(BenchmarkId::new("sweep", extra), &layout, |b, layout| {
            b.iter(|| {
                let mut acc = 0;
                for padded in layout.padded_range() {
                    acc += layout.to_real(black_box(padded));
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_swipe_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/swipe_loop");

    for real_count in [3usize, 16, 256] {
        group.throughput(Throughput::Elements(real_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(real_count),
            &real_count,
            |b, &real_count| {
                b.iter(|| {
                    let mut pager =
                        CircularPager::new(FixedPageSource::new(real_count)).attach(Strip(0));
                    for _ in 0..real_count {
                        let next = pager.container().0 + 1;
                        pager.dispatch(PageEvent::StateChanged(ScrollState::Dragging));
                        pager.container_mut().0 = next;
                        pager.dispatch(PageEvent::Selected(next));
                        black_box(pager.dispatch(PageEvent::StateChanged(ScrollState::Idle)));
                    }
                    black_box(pager.current_real_position())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_to_real, bench_swipe_loop);
criterion_main!(benches);
