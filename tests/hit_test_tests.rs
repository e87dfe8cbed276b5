use frieze::api::{PointerTarget, RenderStyle, ResizeMode, TimelineEditor};
use frieze::core::{
    ArtistSpanItem, EventItem, ImageRef, ItemColor, PeriodItem, TimelineConfig, TimelineItem,
};
use frieze::render::NullRenderer;

fn editor() -> TimelineEditor<NullRenderer> {
    let config = TimelineConfig::new(1800, 2000, 50).with_pages(1000.0, 800.0, 1, 1);
    TimelineEditor::new(NullRenderer::default(), config).expect("editor init")
}

fn event(year: i64, position_y: f64) -> TimelineItem {
    TimelineItem::Event(EventItem {
        name: "Starry Night".to_owned(),
        year,
        image: ImageRef::new(vec![1]),
        position_y,
        width: 120.0,
        height: 120.0,
    })
}

#[test]
fn empty_space_resolves_to_canvas() {
    let mut editor = editor();
    editor.insert_item(event(1900, 100.0));

    assert_eq!(editor.hit_test(900.0, 700.0).expect("hit test"), PointerTarget::Canvas);
}

#[test]
fn overlapping_items_resolve_to_the_topmost() {
    let mut editor = editor();
    let below = editor.insert_item(event(1900, 100.0));
    let above = editor.insert_item(event(1905, 110.0));

    assert_eq!(
        editor.hit_test(500.0, 150.0).expect("hit test"),
        PointerTarget::ItemBody(above)
    );
    assert_eq!(
        editor.hit_test(445.0, 105.0).expect("hit test"),
        PointerTarget::ItemBody(below)
    );
}

#[test]
fn events_sit_above_periods() {
    let mut editor = editor();
    let event = editor.insert_item(event(1900, 100.0));
    let period = editor.insert_item(TimelineItem::Period(PeriodItem {
        name: "Post-Impressionism".to_owned(),
        start_year: 1880,
        end_year: 1920,
        color: ItemColor::parse("teal").expect("named color"),
        position_y: 120.0,
        height: 60.0,
    }));

    assert_eq!(
        editor.hit_test(500.0, 150.0).expect("hit test"),
        PointerTarget::ItemBody(event)
    );
    assert_eq!(
        editor.hit_test(420.0, 150.0).expect("hit test"),
        PointerTarget::ItemBody(period)
    );
}

#[test]
fn artist_span_is_hit_within_tolerance() {
    let mut editor = editor();
    let span = editor.insert_item(TimelineItem::ArtistSpan(ArtistSpanItem {
        name: "Vincent van Gogh".to_owned(),
        birth_year: 1853,
        death_year: 1890,
        position_y: 300.0,
    }));
    let tolerance = RenderStyle::default().artist_hit_tolerance_px;

    assert_eq!(
        editor.hit_test(350.0, 300.0 + tolerance - 1.0).expect("hit test"),
        PointerTarget::ItemBody(span)
    );
    assert_eq!(
        editor.hit_test(350.0, 300.0 + tolerance + 1.0).expect("hit test"),
        PointerTarget::Canvas
    );
}

#[test]
fn event_regions_list_corner_before_strip() {
    let mut editor = editor();
    let target = editor.insert_item(event(1900, 100.0));

    let regions = editor.item_regions().expect("regions");

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].item, target);
    let modes: Vec<ResizeMode> = regions[0].handles.iter().map(|(_, mode)| *mode).collect();
    assert_eq!(modes, vec![ResizeMode::Proportional, ResizeMode::Vertical]);
}
