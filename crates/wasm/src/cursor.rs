use std::rc::Rc;

use folio_core::motion::{cursor_shade, cursor_transform, shade_css};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::dom;

/// Moves the cursor follower with the pointer and shades it by scroll
/// position.
pub struct CursorTracker {
    window: Window,
    document: Document,
    element: HtmlElement,
}

impl CursorTracker {
    pub fn find(window: &Window, document: &Document) -> Option<Self> {
        let element = dom::find(document, dom::CURSOR_SELECTOR)?;
        Some(Self {
            window: window.clone(),
            document: document.clone(),
            element,
        })
    }

    pub fn follow(&self, client_x: f64, client_y: f64) {
        let _ = dom::set_style(
            &self.element,
            "transform",
            &cursor_transform(client_x, client_y),
        );
    }

    pub fn recolor(&self) {
        let Some(value) = cursor_shade(
            dom::scroll_y(&self.window),
            dom::document_height(&self.document),
            dom::viewport(&self.window).height,
        ) else {
            return;
        };
        let _ = dom::set_style(&self.element, "background-color", &shade_css(value));
    }

    /// Colour once, then track pointer, scroll, and resize events.
    pub fn listen(self: Rc<Self>) -> Vec<EventListener> {
        self.recolor();

        let on_move = Rc::clone(&self);
        let mousemove = EventListener::new_with_options(
            &self.window,
            "mousemove",
            dom::passive(),
            move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    on_move.follow(f64::from(event.client_x()), f64::from(event.client_y()));
                }
            },
        );

        let on_scroll = Rc::clone(&self);
        let scroll = EventListener::new_with_options(
            &self.window,
            "scroll",
            dom::passive(),
            move |_| on_scroll.recolor(),
        );

        let on_resize = Rc::clone(&self);
        let resize = EventListener::new(&self.window, "resize", move |_| on_resize.recolor());

        vec![mousemove, scroll, resize]
    }
}
