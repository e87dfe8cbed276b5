use std::rc::Rc;

use frieze::api::{ArtistSpanDraft, EventDraft, FormRequest, ItemDraft, PeriodDraft, TimelineEditor};
use frieze::core::{ImageRef, ItemKind, TimelineConfig};
use frieze::platform_gtk::{GtkTimelineAdapter, SharedEditor};
use frieze::render::CairoRenderer;
use gtk4 as gtk;
use gtk4::prelude::*;

fn main() {
    let _ = frieze::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.frieze.demos.gtk_timeline_editor")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let editor = match build_editor() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("failed to initialize timeline editor: {err}");
            return;
        }
    };

    let adapter = GtkTimelineAdapter::new(editor);
    let editor = adapter.editor();
    let drawing_area = adapter.drawing_area().clone();

    let status_label = gtk::Label::new(Some("drag items, resize from the bottom edge or corner"));
    status_label.set_xalign(0.0);

    let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    let add_event = gtk::Button::with_label("Add Event");
    let add_period = gtk::Button::with_label("Add Period");
    let add_artist = gtk::Button::with_label("Add Artist");
    let shift_selected = gtk::Button::with_label("Shift Selected +10y");
    let delete_selected = gtk::Button::with_label("Delete Selected");
    for button in [&add_event, &add_period, &add_artist, &shift_selected, &delete_selected] {
        controls.append(button);
    }

    connect_submit(&add_event, &editor, &drawing_area, &status_label, |_| {
        let image = sample_image().ok()?;
        Some(FormRequest::create(ItemDraft::Event(EventDraft::new(
            "Printing press",
            1450,
            image,
        ))))
    });
    connect_submit(&add_period, &editor, &drawing_area, &status_label, |_| {
        Some(FormRequest::create(ItemDraft::Period(PeriodDraft::new(
            "Baroque", 1600, 1750, "#b8860b",
        ))))
    });
    connect_submit(&add_artist, &editor, &drawing_area, &status_label, |_| {
        Some(FormRequest::create(ItemDraft::ArtistSpan(ArtistSpanDraft::new(
            "Rembrandt", 1606, 1669,
        ))))
    });
    connect_submit(&shift_selected, &editor, &drawing_area, &status_label, |editor| {
        let mut request = editor.edit_selected()?;
        match &mut request.draft {
            ItemDraft::Event(draft) => draft.year = draft.year.map(|year| year + 10),
            ItemDraft::Period(draft) => {
                draft.start_year = draft.start_year.map(|year| year + 10);
                draft.end_year = draft.end_year.map(|year| year + 10);
            }
            ItemDraft::ArtistSpan(draft) => {
                draft.birth_year = draft.birth_year.map(|year| year + 10);
                draft.death_year = draft.death_year.map(|year| year + 10);
            }
        }
        Some(request)
    });

    {
        let editor = Rc::clone(&editor);
        let drawing_area = drawing_area.clone();
        let status_label = status_label.clone();
        delete_selected.connect_clicked(move |_| {
            if let Ok(mut editor) = editor.try_borrow_mut() {
                let deleted = editor.delete_selected();
                status_label.set_text(if deleted { "deleted" } else { "nothing selected" });
            }
            drawing_area.queue_draw();
        });
    }

    let scroller = gtk::ScrolledWindow::new();
    scroller.set_child(Some(&drawing_area));
    scroller.set_vexpand(true);

    let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
    root.append(&controls);
    root.append(&scroller);
    root.append(&status_label);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("frieze timeline editor")
        .default_width(1200)
        .default_height(860)
        .child(&root)
        .build();
    window.present();
}

fn connect_submit<F>(
    button: &gtk::Button,
    editor: &SharedEditor<CairoRenderer>,
    drawing_area: &gtk::DrawingArea,
    status_label: &gtk::Label,
    make_request: F,
) where
    F: Fn(&TimelineEditor<CairoRenderer>) -> Option<FormRequest> + 'static,
{
    let editor = Rc::clone(editor);
    let drawing_area = drawing_area.clone();
    let status_label = status_label.clone();
    button.connect_clicked(move |_| {
        if let Ok(mut editor) = editor.try_borrow_mut() {
            let Some(request) = make_request(&*editor) else {
                status_label.set_text("nothing to submit");
                return;
            };
            match editor.submit_form(request) {
                Ok(outcome) => status_label.set_text(&format!("{outcome:?}")),
                Err(err) => status_label.set_text(&format!("rejected: {err}")),
            }
        }
        drawing_area.queue_draw();
    });
}

fn build_editor() -> frieze::TimelineResult<TimelineEditor<CairoRenderer>> {
    let config = TimelineConfig::new(1400, 2000, 50).with_pages(1123.0, 794.0, 2, 1);
    let canvas = config.canvas();
    let renderer = CairoRenderer::new(canvas.width as i32, canvas.height as i32)?;
    let mut editor = TimelineEditor::new(renderer, config)?;

    let mut request = editor.add_new(ItemKind::Period);
    if let ItemDraft::Period(draft) = &mut request.draft {
        draft.name = "Renaissance".to_owned();
        draft.start_year = Some(1400);
        draft.end_year = Some(1600);
        draft.position_y = Some(470.0);
    }
    editor.submit_form(request)?;

    editor.submit_form(FormRequest::create(ItemDraft::ArtistSpan(
        ArtistSpanDraft::new("Leonardo da Vinci", 1452, 1519),
    )))?;

    let mut mona_lisa = EventDraft::new("Mona Lisa", 1503, sample_image()?);
    mona_lisa.position_y = Some(150.0);
    editor.submit_form(FormRequest::create(ItemDraft::Event(mona_lisa)))?;

    Ok(editor)
}

/// Solid placeholder artwork encoded as PNG.
fn sample_image() -> frieze::TimelineResult<ImageRef> {
    let to_error =
        |err: &dyn std::fmt::Display| frieze::TimelineError::InvalidData(err.to_string());
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 64, 64)
        .map_err(|err| to_error(&err))?;
    {
        let context = cairo::Context::new(&surface).map_err(|err| to_error(&err))?;
        context.set_source_rgb(0.55, 0.45, 0.3);
        context.paint().map_err(|err| to_error(&err))?;
    }
    let mut bytes = Vec::new();
    surface
        .write_to_png(&mut bytes)
        .map_err(|err| to_error(&err))?;
    Ok(ImageRef::new(bytes))
}
