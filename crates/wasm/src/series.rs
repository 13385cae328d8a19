use std::cell::RefCell;
use std::rc::Rc;

use folio_core::model::{SeriesSwitcher, SwitchError, SwitchTicket};
use folio_core::views::{GalleryOptions, LoadStrategy, apply_commands};
use folio_protocol::{ClassToken, GalleryCommand};
use futures::future::join_all;
use gloo::events::EventListener;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, HtmlImageElement, Window};

use crate::console;
use crate::dom;
use crate::gallery::DomGallery;
use crate::pinned::HorizontalDriver;

/// Renders series into the gallery and keeps the pinned scroll geometry in
/// step with it.
///
/// Built after the horizontal driver so it can hold the driver directly;
/// pages without the pinned effect pass `None`.
pub struct SeriesController {
    window: Window,
    switcher: RefCell<SeriesSwitcher>,
    gallery: RefCell<DomGallery>,
    driver: Option<Rc<HorizontalDriver>>,
    buttons: Vec<HtmlElement>,
}

impl SeriesController {
    pub fn new(
        window: &Window,
        switcher: SeriesSwitcher,
        gallery: DomGallery,
        driver: Option<Rc<HorizontalDriver>>,
        buttons: Vec<HtmlElement>,
    ) -> Rc<Self> {
        Rc::new(Self {
            window: window.clone(),
            switcher: RefCell::new(switcher),
            gallery: RefCell::new(gallery),
            driver,
            buttons,
        })
    }

    pub fn active(&self) -> String {
        self.switcher.borrow().active().to_string()
    }

    /// Render the series chosen by the payload.
    pub fn show_initial(self: &Rc<Self>) {
        let (ticket, commands) = self.switcher.borrow().initial(&GalleryOptions::default());
        self.show(ticket, &commands);
    }

    /// Switch to `name`: back to the top of the page, rebuild with the
    /// newest images prioritised, and recompute geometry now and again once
    /// the eager images have decoded.
    pub fn switch_to(self: &Rc<Self>, name: &str) -> Result<(), SwitchError> {
        let options = GalleryOptions::default().with_strategy(LoadStrategy::SERIES_SWITCH);
        let (ticket, commands) = self.switcher.borrow_mut().switch(name, &options)?;
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
        self.show(ticket, &commands);
        Ok(())
    }

    fn show(self: &Rc<Self>, ticket: SwitchTicket, commands: &[GalleryCommand]) {
        let pending = {
            let mut gallery = self.gallery.borrow_mut();
            if let Err(e) = apply_commands(&mut *gallery, commands) {
                console::error(&format!("failed to build gallery: {e:?}"));
            }
            gallery.take_pending()
        };

        self.mark_active(ticket.series().as_str());
        self.recalculate();

        let this = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            settle(pending).await;
            if this.switcher.borrow().is_current(&ticket) {
                this.recalculate();
            } else {
                console::log(&format!(
                    "dropping stale layout pass for {}",
                    ticket.series()
                ));
            }
        });
    }

    fn recalculate(&self) {
        if let Some(driver) = &self.driver {
            driver.recalculate();
        }
    }

    fn mark_active(&self, series: &str) {
        for button in &self.buttons {
            let selected = button.get_attribute(dom::SERIES_ATTRIBUTE).as_deref() == Some(series);
            let _ = button
                .class_list()
                .toggle_with_force(ClassToken::ActiveSeries.class_name(), selected);
        }
    }

    /// One click listener per series button.
    pub fn listen(self: &Rc<Self>) -> Vec<EventListener> {
        self.buttons
            .iter()
            .filter_map(|button| {
                let name = button.get_attribute(dom::SERIES_ATTRIBUTE)?;
                let this = Rc::clone(self);
                Some(EventListener::new(button, "click", move |_| {
                    if let Err(e) = this.switch_to(&name) {
                        console::warn(&e.to_string());
                    }
                }))
            })
            .collect()
    }
}

/// Wait for every image to decode. Failures are ignored so one broken
/// image cannot hold back the rest.
async fn settle(images: Vec<HtmlImageElement>) {
    let decodes = images.into_iter().map(|img| JsFuture::from(img.decode()));
    let _ = join_all(decodes).await;
}
