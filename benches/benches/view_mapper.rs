// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_view_mapper::{MapperConfig, ViewportMapper};

fn mapper() -> ViewportMapper {
    let config = MapperConfig::new(Size::new(4096.0, 3072.0), Size::new(1280.0, 720.0))
        .with_cell(Vec2::new(1.0, 0.5))
        .with_limit_in_window(true);
    let mut mapper = ViewportMapper::new(config);
    mapper.zoom(Point::new(640.0, 360.0), 3.0);
    mapper
}

fn bench_trans_coords(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_mapper/trans");
    let mapper = mapper();

    // Polyline-sized buffers: a few outlines up to a dense scatter plot.
    for pairs in [64usize, 1_024, 16_384, 262_144] {
        let coords: Vec<f64> = (0..pairs)
            .flat_map(|i| [(i % 4096) as f64 + 0.5, (i / 4096) as f64 + 0.25])
            .collect();
        group.throughput(Throughput::Elements(pairs as u64));

        group.bench_with_input(
            BenchmarkId::new("in_to_out", pairs),
            &coords,
            |b, coords| {
                b.iter(|| black_box(mapper.trans_in_to_out(black_box(coords))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("out_to_in", pairs),
            &coords,
            |b, coords| {
                b.iter(|| black_box(mapper.trans_out_to_in(black_box(coords))));
            },
        );
    }

    group.finish();
}

fn bench_interaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_mapper/interaction");

    // One frame of wheel zoom plus drag, as a controller would issue them.
    group.bench_function("zoom_translate", |b| {
        let mut mapper = mapper();
        let mut ratio = 1.1;
        b.iter(|| {
            mapper.zoom(black_box(Point::new(320.0, 200.0)), ratio);
            mapper.translate(black_box(Vec2::new(-3.0, 2.0)));
            ratio = 1.0 / ratio;
        });
    });

    group.bench_function("scroll_to_rect", |b| {
        let mut mapper = mapper();
        b.iter(|| mapper.scroll_to_rect(black_box(Rect::new(100.0, 200.0, 400.0, 500.0))));
    });

    group.finish();
}

criterion_group!(benches, bench_trans_coords, bench_interaction);
criterion_main!(benches);
