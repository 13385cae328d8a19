mod console;
mod cursor;
mod dom;
mod gallery;
mod pinned;
mod series;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::model::SeriesSwitcher;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::cursor::CursorTracker;
use crate::gallery::DomGallery;
use crate::pinned::HorizontalDriver;
use crate::series::SeriesController;

/// Everything that has to stay alive for the page's lifetime.
#[derive(Default)]
struct Page {
    listeners: Vec<EventListener>,
    controller: Option<Rc<SeriesController>>,
}

thread_local! {
    static PAGE: RefCell<Page> = RefCell::new(Page::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let mut page = Page::default();

    let switcher = load_switcher(&document);

    if let Some(tracker) = CursorTracker::find(&window, &document) {
        page.listeners.extend(Rc::new(tracker).listen());
    }

    let driver = match HorizontalDriver::negotiate(&window, &document) {
        Ok(driver) => Some(Rc::new(driver)),
        Err(reason) => {
            console::log(&format!("pinned scroll disabled: {reason:?}"));
            None
        }
    };

    // Render before the driver starts listening so the track has its
    // final width when first measured.
    if let Some(switcher) = switcher {
        match DomGallery::find(&document) {
            Some(gallery) => {
                let buttons = dom::find_all(&document, dom::SERIES_BUTTON_SELECTOR);
                let controller =
                    SeriesController::new(&window, switcher, gallery, driver.clone(), buttons);
                controller.show_initial();
                page.listeners.extend(controller.listen());
                page.controller = Some(controller);
            }
            None => console::warn("gallery containers not found"),
        }
    }

    if let Some(driver) = driver {
        page.listeners.extend(driver.listen());
    }

    PAGE.with(|slot| *slot.borrow_mut() = page);
    Ok(())
}

/// Switch the gallery to the named series.
#[wasm_bindgen]
pub fn switch_series(name: &str) -> Result<(), JsError> {
    let controller = PAGE
        .with(|slot| slot.borrow().controller.clone())
        .ok_or_else(|| JsError::new("gallery not initialised"))?;
    controller
        .switch_to(name)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Name of the series currently shown, if a gallery was built.
#[wasm_bindgen]
pub fn active_series() -> Option<String> {
    PAGE.with(|slot| {
        slot.borrow()
            .controller
            .as_ref()
            .map(|controller| controller.active())
    })
}

fn load_switcher(document: &Document) -> Option<SeriesSwitcher> {
    let Some(element) = document.get_element_by_id(dom::DATA_ELEMENT_ID) else {
        console::warn("no portfolio data on this page");
        return None;
    };
    let text = element.text_content().unwrap_or_default();
    match SeriesSwitcher::from_payload(&text) {
        Ok(switcher) => Some(switcher),
        Err(e) => {
            console::error(&format!("failed to parse portfolio data: {e}"));
            None
        }
    }
}
