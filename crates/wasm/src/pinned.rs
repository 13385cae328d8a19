use std::rc::Rc;

use folio_core::motion::{DisabledReason, MotionCapability, PinnedLayout, translate_x};
use folio_protocol::ClassToken;
use gloo::events::EventListener;
use web_sys::{Document, HtmlElement, Window};

use crate::console;
use crate::dom;

/// Drives the pinned horizontal gallery: sizes the section so its vertical
/// scroll range equals the track's overflow, and translates the track as
/// the section scrolls past.
pub struct HorizontalDriver {
    window: Window,
    section: HtmlElement,
    sticky: Option<HtmlElement>,
    track: HtmlElement,
}

impl HorizontalDriver {
    /// Negotiate the effect once. When it is off the root element gets the
    /// reduced-motion marker so the stylesheet falls back to normal flow.
    pub fn negotiate(window: &Window, document: &Document) -> Result<Self, DisabledReason> {
        let acquired = MotionCapability::acquire(
            dom::find(document, dom::SECTION_SELECTOR),
            dom::find(document, dom::TRACK_SELECTOR),
            dom::prefers_reduced_motion(window),
        );
        match acquired {
            Ok((section, track)) => Ok(Self {
                window: window.clone(),
                sticky: dom::find(document, dom::STICKY_SELECTOR),
                section,
                track,
            }),
            Err(reason) => {
                mark_reduced_motion(document);
                Err(reason)
            }
        }
    }

    fn layout(&self) -> PinnedLayout {
        PinnedLayout::new(
            f64::from(self.track.scroll_width()),
            dom::viewport(&self.window),
            self.sticky.as_ref().map(|s| f64::from(s.offset_height())),
        )
    }

    pub fn set_height(&self) {
        let height = self.layout().section_height();
        let _ = dom::set_style(&self.section, "height", &format!("{height}px"));
    }

    pub fn update(&self) {
        let layout = self.layout();
        let top = self.section.get_bounding_client_rect().top();
        let height = f64::from(self.section.offset_height());
        if let Some(offset) = layout.track_offset(top, height) {
            let _ = dom::set_style(&self.track, "transform", &translate_x(offset));
        }
    }

    /// Re-measure after the track's content changed. At the top of the page
    /// the track is snapped back to rest so no stale offset survives.
    pub fn recalculate(&self) {
        self.set_height();
        self.update();
        if dom::scroll_y(&self.window) == 0.0 {
            let _ = dom::set_style(&self.track, "transform", &translate_x(0.0));
        }
    }

    pub fn listen(self: Rc<Self>) -> Vec<EventListener> {
        self.set_height();
        self.update();

        let on_resize = Rc::clone(&self);
        let resize = EventListener::new(&self.window, "resize", move |_| {
            on_resize.set_height();
            on_resize.update();
        });

        let on_scroll = Rc::clone(&self);
        let scroll = EventListener::new_with_options(
            &self.window,
            "scroll",
            dom::passive(),
            move |_| on_scroll.update(),
        );

        vec![resize, scroll]
    }
}

fn mark_reduced_motion(document: &Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    if let Err(e) = root.class_list().add_1(ClassToken::ReduceMotion.class_name()) {
        console::warn(&format!("could not mark reduced motion: {e:?}"));
    }
}
