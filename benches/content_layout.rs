// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_toast::layout;
use iced_toast::ToastStyle;
use std::hint::black_box;

fn content_layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_layout");

    let style = ToastStyle::default();
    let container = Size::new(800.0, 600.0);

    group.bench_function("frame_with_all_parts", |b| {
        b.iter(|| {
            let image = layout::image_box(black_box(&style), true);
            let constraints =
                layout::text_constraints(black_box(container), &style, image.width, 16.0, 0);
            let title = Size::new(constraints.width.min(120.0), 20.0);
            let message = Size::new(constraints.width.min(240.0), 60.0);
            black_box(layout::frame(&style, image, Some(title), Some(message)))
        });
    });

    group.bench_function("frame_message_only", |b| {
        b.iter(|| {
            let image = layout::image_box(black_box(&style), false);
            black_box(layout::frame(
                &style,
                image,
                None,
                Some(Size::new(240.0, 40.0)),
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, content_layout_benchmark);
criterion_main!(benches);
