use criterion::{Criterion, criterion_group, criterion_main};
use frieze::api::TimelineEditor;
use frieze::core::{
    EventItem, ImageRef, ItemColor, PeriodItem, TimelineConfig, TimelineItem, YearScale,
    graduation_years,
};
use frieze::render::NullRenderer;
use std::hint::black_box;

fn bench_year_scale_round_trip(c: &mut Criterion) {
    let scale = YearScale::new(-3000, 2025, 1123.0 * 8.0).expect("valid scale");

    c.bench_function("year_scale_round_trip", |b| {
        b.iter(|| {
            let x = scale.year_to_x(black_box(1503.0)).expect("to x");
            let _ = scale.x_to_year(x).expect("to year");
        })
    });
}

fn bench_graduations(c: &mut Criterion) {
    c.bench_function("graduations_5k_years_step_10", |b| {
        b.iter(|| {
            graduation_years(black_box(-3000), black_box(2025), black_box(10))
                .expect("step")
                .sum::<i64>()
        })
    });
}

fn populated_editor(items: usize) -> TimelineEditor<NullRenderer> {
    let config = TimelineConfig::new(1400, 2000, 10).with_pages(1123.0, 794.0, 4, 2);
    let mut editor = TimelineEditor::new(NullRenderer::default(), config).expect("editor init");
    let image = ImageRef::new(vec![0u8; 4096]);
    for i in 0..items {
        let year = 1400 + (i as i64 * 7) % 600;
        let position_y = (i % 12) as f64 * 60.0;
        let item = if i % 2 == 0 {
            TimelineItem::Event(EventItem {
                name: format!("event {i}"),
                year,
                image: image.clone(),
                position_y,
                width: 120.0,
                height: 120.0,
            })
        } else {
            TimelineItem::Period(PeriodItem {
                name: format!("period {i}"),
                start_year: year,
                end_year: year + 40,
                color: ItemColor::Rgb(70, 130, 180),
                position_y,
                height: 40.0,
            })
        };
        editor.insert_item(item);
    }
    editor
}

fn bench_render_frame_500_items(c: &mut Criterion) {
    let editor = populated_editor(500);

    c.bench_function("render_frame_500_items", |b| {
        b.iter(|| {
            let _ = black_box(&editor)
                .build_render_frame()
                .expect("frame should build");
        })
    });
}

fn bench_drag_move_500_items(c: &mut Criterion) {
    let mut editor = populated_editor(500);
    editor.pointer_down(200.0, 30.0).expect("pointer down");
    let mut step = 0.0;

    c.bench_function("drag_move_with_hit_regions_500_items", |b| {
        b.iter(|| {
            step = (step + 1.0) % 200.0;
            editor.pointer_move(black_box(200.0 + step), black_box(30.0 + step));
            let _ = editor.hit_test(black_box(640.0), black_box(320.0)).expect("hit test");
        })
    });
}

criterion_group!(
    benches,
    bench_year_scale_round_trip,
    bench_graduations,
    bench_render_frame_500_items,
    bench_drag_move_500_items
);
criterion_main!(benches);
