use frieze::TimelineError;
use frieze::api::{
    FormRequest, InteractionMode, ItemDraft, PeriodDraft, PointerTarget, ResizeMode,
    TimelineEditor,
};
use frieze::core::{
    EventItem, ImageRef, ItemColor, ItemRef, PeriodItem, TimelineConfig, TimelineItem,
};
use frieze::render::NullRenderer;

fn editor() -> TimelineEditor<NullRenderer> {
    let config = TimelineConfig::new(1800, 2000, 50).with_pages(1000.0, 800.0, 1, 1);
    TimelineEditor::new(NullRenderer::default(), config).expect("editor init")
}

/// Box spans x 440..560, y 100..220.
fn insert_event(editor: &mut TimelineEditor<NullRenderer>) -> ItemRef {
    editor.insert_item(TimelineItem::Event(EventItem {
        name: "Mona Lisa".to_owned(),
        year: 1900,
        image: ImageRef::new(vec![1, 2, 3]),
        position_y: 100.0,
        width: 120.0,
        height: 120.0,
    }))
}

/// Bar spans x 500..750, y 100..140.
fn insert_period(editor: &mut TimelineEditor<NullRenderer>) -> ItemRef {
    editor.insert_item(TimelineItem::Period(PeriodItem {
        name: "Belle Époque".to_owned(),
        start_year: 1900,
        end_year: 1950,
        color: ItemColor::Rgb(200, 160, 40),
        position_y: 100.0,
        height: 40.0,
    }))
}

fn event_size(editor: &TimelineEditor<NullRenderer>, target: ItemRef) -> (f64, f64) {
    let event = editor.store().event(target.id).expect("event");
    (event.width, event.height)
}

#[test]
fn corner_handle_starts_proportional_resize() {
    let mut editor = editor();
    let target = insert_event(&mut editor);

    assert_eq!(
        editor.hit_test(555.0, 215.0).expect("hit test"),
        PointerTarget::ResizeHandle(target, ResizeMode::Proportional)
    );
    let mode = editor.pointer_down(555.0, 215.0).expect("pointer down");

    assert_eq!(mode, InteractionMode::Resizing);
    assert_eq!(editor.selected_item(), Some(target));
}

#[test]
fn proportional_resize_grows_by_larger_delta() {
    let mut editor = editor();
    let target = insert_event(&mut editor);

    editor.pointer_down(555.0, 215.0).expect("pointer down");
    editor.pointer_move(595.0, 225.0);

    assert_eq!(event_size(&editor, target), (160.0, 160.0));
}

#[test]
fn proportional_resize_stops_at_floor() {
    let mut editor = editor();
    let target = insert_event(&mut editor);

    editor.pointer_down(555.0, 215.0).expect("pointer down");
    editor.pointer_move(355.0, 15.0);
    editor.pointer_up();

    assert_eq!(event_size(&editor, target), (80.0, 80.0));
}

#[test]
fn proportional_resize_keeps_year_and_position() {
    let mut editor = editor();
    let target = insert_event(&mut editor);

    editor.pointer_down(555.0, 215.0).expect("pointer down");
    editor.pointer_move(615.0, 215.0);

    let event = editor.store().event(target.id).expect("event");
    assert_eq!((event.year, event.position_y), (1900, 100.0));
    assert_eq!((event.width, event.height), (180.0, 180.0));
}

#[test]
fn event_bottom_strip_resizes_height_only() {
    let mut editor = editor();
    let target = insert_event(&mut editor);

    assert_eq!(
        editor.hit_test(480.0, 217.0).expect("hit test"),
        PointerTarget::ResizeHandle(target, ResizeMode::Vertical)
    );
    editor.pointer_down(480.0, 217.0).expect("pointer down");
    editor.pointer_move(530.0, 257.0);

    assert_eq!(event_size(&editor, target), (120.0, 160.0));
}

#[test]
fn event_vertical_resize_floor_is_eighty() {
    let mut editor = editor();
    let target = insert_event(&mut editor);

    editor.pointer_down(480.0, 217.0).expect("pointer down");
    editor.pointer_move(480.0, 117.0);

    assert_eq!(event_size(&editor, target), (120.0, 80.0));
}

#[test]
fn period_vertical_resize_floor_is_thirty() {
    let mut editor = editor();
    let target = insert_period(&mut editor);

    assert_eq!(
        editor.hit_test(600.0, 137.0).expect("hit test"),
        PointerTarget::ResizeHandle(target, ResizeMode::Vertical)
    );
    editor.pointer_down(600.0, 137.0).expect("pointer down");
    editor.pointer_move(600.0, 37.0);

    assert_eq!(editor.store().period(target.id).expect("period").height, 30.0);

    editor.pointer_move(600.0, 177.0);
    let period = editor.store().period(target.id).expect("period");
    assert_eq!(period.height, 80.0);
    assert_eq!((period.start_year, period.end_year), (1900, 1950));
}

#[test]
fn proportional_resize_of_period_is_rejected() {
    let mut editor = editor();
    let target = insert_period(&mut editor);

    let result = editor.pointer_down_on(
        PointerTarget::ResizeHandle(target, ResizeMode::Proportional),
        600.0,
        137.0,
    );

    assert!(matches!(result, Err(TimelineError::InvalidData(_))));
    assert_eq!(editor.interaction_mode(), InteractionMode::Idle);
    assert!(!editor.pointer_capture_active());
}

#[test]
fn resize_of_missing_item_reports_not_found() {
    let mut editor = editor();
    let target = insert_event(&mut editor);
    assert!(editor.delete_item(target));

    let result = editor.pointer_down_on(
        PointerTarget::ResizeHandle(target, ResizeMode::Vertical),
        480.0,
        217.0,
    );

    assert!(matches!(result, Err(TimelineError::NotFound { .. })));
    assert_eq!(editor.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn resizing_a_period_wider_than_i64_span_does_not_overflow() {
    let mut editor = editor();
    let target = editor
        .submit_form(FormRequest::create(ItemDraft::Period(PeriodDraft::new(
            "Deep time",
            -5_000_000_000_000_000_000,
            5_000_000_000_000_000_000,
            "red",
        ))))
        .expect("submit")
        .item();

    let mode = editor
        .pointer_down_on(
            PointerTarget::ResizeHandle(target, ResizeMode::Vertical),
            500.0,
            137.0,
        )
        .expect("pointer down");
    assert_eq!(mode, InteractionMode::Resizing);

    editor.pointer_move(500.0, 177.0);
    editor.pointer_up();

    assert_eq!(editor.store().period(target.id).expect("period").height, 80.0);
}
