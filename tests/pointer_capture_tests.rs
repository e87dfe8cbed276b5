use std::cell::Cell;
use std::rc::Rc;

use frieze::TimelineError;
use frieze::api::{InteractionMode, TimelineEditor};
use frieze::core::TimelineConfig;
use frieze::interaction::{PointerCapture, PointerCaptureHost};
use frieze::render::NullRenderer;

#[derive(Default, Clone)]
struct Counters {
    attached: Rc<Cell<u32>>,
    detached: Rc<Cell<u32>>,
}

impl Counters {
    fn snapshot(&self) -> (u32, u32) {
        (self.attached.get(), self.detached.get())
    }
}

struct CountingHost {
    counters: Counters,
}

impl PointerCaptureHost for CountingHost {
    fn attach(&mut self) {
        self.counters.attached.set(self.counters.attached.get() + 1);
    }

    fn detach(&mut self) {
        self.counters.detached.set(self.counters.detached.get() + 1);
    }
}

fn editor_with_host() -> (TimelineEditor<NullRenderer>, Counters) {
    let mut editor = TimelineEditor::new(NullRenderer::default(), TimelineConfig::default())
        .expect("editor init");
    let counters = Counters::default();
    editor.set_pointer_capture_host(Box::new(CountingHost {
        counters: counters.clone(),
    }));
    (editor, counters)
}

#[test]
fn listeners_attach_on_pointer_down_and_detach_on_pointer_up() {
    let (mut editor, counters) = editor_with_host();

    editor.pointer_down(10.0, 10.0).expect("pointer down");
    editor.pointer_move(20.0, 20.0);
    editor.pointer_move(30.0, 30.0);
    assert_eq!(counters.snapshot(), (1, 0));
    assert!(editor.pointer_capture_active());

    editor.pointer_up();
    assert_eq!(counters.snapshot(), (1, 1));
    assert!(!editor.pointer_capture_active());
}

#[test]
fn pointer_up_while_idle_does_not_detach() {
    let (mut editor, counters) = editor_with_host();

    editor.pointer_up();

    assert_eq!(counters.snapshot(), (0, 0));
}

#[test]
fn second_pointer_down_is_rejected_while_active() {
    let (mut editor, counters) = editor_with_host();

    editor.pointer_down(10.0, 10.0).expect("pointer down");
    let result = editor.pointer_down(50.0, 50.0);

    assert!(matches!(result, Err(TimelineError::InteractionInProgress)));
    assert_eq!(editor.interaction_mode(), InteractionMode::Panning);
    assert_eq!(counters.snapshot(), (1, 0));
}

#[test]
fn teardown_mid_interaction_detaches_and_resets() {
    let (mut editor, counters) = editor_with_host();

    editor.pointer_down(10.0, 10.0).expect("pointer down");
    editor.pointer_move(40.0, 10.0);
    editor.teardown();

    assert_eq!(counters.snapshot(), (1, 1));
    assert_eq!(editor.interaction_mode(), InteractionMode::Idle);
    assert_eq!(editor.viewport_offset().x, 30.0);
}

#[test]
fn dropping_the_editor_mid_interaction_detaches() {
    let (mut editor, counters) = editor_with_host();

    editor.pointer_down(10.0, 10.0).expect("pointer down");
    drop(editor);

    assert_eq!(counters.snapshot(), (1, 1));
}

#[test]
fn into_renderer_mid_interaction_detaches() {
    let (mut editor, counters) = editor_with_host();

    editor.pointer_down(10.0, 10.0).expect("pointer down");
    let _renderer = editor.into_renderer();

    assert_eq!(counters.snapshot(), (1, 1));
}

#[test]
fn replacing_host_mid_interaction_moves_listeners() {
    let (mut editor, first) = editor_with_host();
    editor.pointer_down(10.0, 10.0).expect("pointer down");

    let second = Counters::default();
    editor.set_pointer_capture_host(Box::new(CountingHost {
        counters: second.clone(),
    }));

    assert_eq!(first.snapshot(), (1, 1));
    assert_eq!(second.snapshot(), (1, 0));

    editor.pointer_up();
    assert_eq!(second.snapshot(), (1, 1));
}

#[test]
fn rejected_pointer_down_never_attaches() {
    let (mut editor, counters) = editor_with_host();

    let result = editor.pointer_down(f64::NAN, 10.0);

    assert!(result.is_err());
    assert_eq!(counters.snapshot(), (0, 0));
    assert_eq!(editor.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn capture_acquire_and_release_are_idempotent() {
    let counters = Counters::default();
    let mut capture = PointerCapture::new(Box::new(CountingHost {
        counters: counters.clone(),
    }));

    capture.acquire();
    capture.acquire();
    capture.release();
    capture.release();

    assert_eq!(counters.snapshot(), (1, 1));
}

#[test]
fn dropping_an_attached_capture_releases_it() {
    let counters = Counters::default();
    {
        let mut capture = PointerCapture::new(Box::new(CountingHost {
            counters: counters.clone(),
        }));
        capture.acquire();
    }

    assert_eq!(counters.snapshot(), (1, 1));
}
