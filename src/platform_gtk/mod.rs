//! GTK4 embedding: a `DrawingArea` driven by a `GestureDrag`.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{debug, warn};

use crate::api::TimelineEditor;
use crate::interaction::PointerCaptureHost;
use crate::render::CairoContextRenderer;
use crate::render::Renderer;

pub type SharedEditor<R> = Rc<RefCell<TimelineEditor<R>>>;

/// Shows a grabbing cursor on the drawing area while a gesture is active.
///
/// GTK already routes drag updates to the gesture that claimed the
/// sequence, so the only listener state to manage is the cursor.
struct DrawingAreaCaptureHost {
    area: gtk::DrawingArea,
}

impl PointerCaptureHost for DrawingAreaCaptureHost {
    fn attach(&mut self) {
        self.area.set_cursor_from_name(Some("grabbing"));
    }

    fn detach(&mut self) {
        self.area.set_cursor_from_name(None);
    }
}

pub struct GtkTimelineAdapter<R: Renderer + CairoContextRenderer + 'static> {
    editor: SharedEditor<R>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkTimelineAdapter<R> {
    #[must_use]
    pub fn new(mut editor: TimelineEditor<R>) -> Self {
        let drawing_area = gtk::DrawingArea::new();
        let canvas = editor.config().canvas();
        drawing_area.set_content_width(canvas.width.round() as i32);
        drawing_area.set_content_height(canvas.height.round() as i32);
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        editor.set_pointer_capture_host(Box::new(DrawingAreaCaptureHost {
            area: drawing_area.clone(),
        }));
        let editor = Rc::new(RefCell::new(editor));

        {
            let editor = Rc::clone(&editor);
            drawing_area.set_draw_func(move |_, context, _, _| {
                let Ok(mut editor) = editor.try_borrow_mut() else {
                    return;
                };
                if let Err(err) = editor.render_on_cairo_context(context) {
                    warn!(error = %err, "timeline draw failed");
                }
            });
        }

        let adapter = Self {
            editor,
            drawing_area,
        };
        adapter.attach_drag_gesture();
        adapter
    }

    #[must_use]
    pub fn editor(&self) -> SharedEditor<R> {
        Rc::clone(&self.editor)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Re-draws after a host-side mutation such as a form submission.
    pub fn queue_draw(&self) {
        self.drawing_area.queue_draw();
    }

    fn attach_drag_gesture(&self) {
        let drag = gtk::GestureDrag::new();
        drag.set_button(gtk::gdk::BUTTON_PRIMARY);

        {
            let editor = Rc::clone(&self.editor);
            let area = self.drawing_area.clone();
            drag.connect_drag_begin(move |_, x, y| {
                if let Ok(mut editor) = editor.try_borrow_mut() {
                    if let Err(err) = editor.pointer_down(x, y) {
                        debug!(error = %err, "gtk drag begin rejected");
                    }
                }
                area.queue_draw();
            });
        }

        {
            let editor = Rc::clone(&self.editor);
            let area = self.drawing_area.clone();
            drag.connect_drag_update(move |gesture, offset_x, offset_y| {
                let Some((start_x, start_y)) = gesture.start_point() else {
                    return;
                };
                if let Ok(mut editor) = editor.try_borrow_mut() {
                    editor.pointer_move(start_x + offset_x, start_y + offset_y);
                }
                area.queue_draw();
            });
        }

        {
            let editor = Rc::clone(&self.editor);
            let area = self.drawing_area.clone();
            drag.connect_drag_end(move |_, _, _| {
                if let Ok(mut editor) = editor.try_borrow_mut() {
                    editor.pointer_up();
                }
                area.queue_draw();
            });
        }

        {
            let editor = Rc::clone(&self.editor);
            drag.connect_cancel(move |_, _| {
                if let Ok(mut editor) = editor.try_borrow_mut() {
                    editor.teardown();
                }
            });
        }

        self.drawing_area.add_controller(drag);

        let editor = Rc::clone(&self.editor);
        self.drawing_area.connect_unrealize(move |_| {
            if let Ok(mut editor) = editor.try_borrow_mut() {
                editor.teardown();
            }
        });
    }
}
