use folio_core::views::GallerySink;
use folio_protocol::{ClassToken, Container, Figure, Loading};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::dom;

/// Writes gallery commands into the page's track and grid containers.
pub struct DomGallery {
    document: Document,
    track: HtmlElement,
    grid: HtmlElement,
    open_row: Option<HtmlElement>,
    /// Eager images created since the last clear; these are awaited before
    /// scroll geometry is recomputed.
    pending: Vec<HtmlImageElement>,
}

impl DomGallery {
    pub fn find(document: &Document) -> Option<Self> {
        Some(Self {
            document: document.clone(),
            track: dom::find(document, dom::TRACK_SELECTOR)?,
            grid: dom::find(document, dom::GRID_SELECTOR)?,
            open_row: None,
            pending: Vec::new(),
        })
    }

    pub fn take_pending(&mut self) -> Vec<HtmlImageElement> {
        std::mem::take(&mut self.pending)
    }

    fn container(&self, target: Container) -> &HtmlElement {
        match target {
            Container::Track => &self.track,
            Container::Grid => &self.grid,
        }
    }

    fn create_image(&self, target: Container, figure: &Figure) -> Result<HtmlImageElement, JsValue> {
        let img = self
            .document
            .create_element("img")?
            .dyn_into::<HtmlImageElement>()?;
        img.set_class_name(figure_class(target).class_name());
        img.set_alt(&figure.alt);
        img.set_attribute("loading", figure.loading.as_attr())?;
        img.set_attribute("decoding", figure.decoding.as_attr())?;
        img.set_attribute("fetchpriority", figure.fetch_priority.as_attr())?;
        // `src` last so the attributes above apply to the first request.
        img.set_src(&figure.src);
        Ok(img)
    }
}

impl GallerySink for DomGallery {
    type Error = JsValue;

    fn clear(&mut self, target: Container) -> Result<(), JsValue> {
        self.container(target).set_inner_html("");
        self.open_row = None;
        self.pending.clear();
        Ok(())
    }

    fn begin_row(&mut self, _row: usize, len: usize) -> Result<(), JsValue> {
        let row = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;
        row.set_class_name(ClassToken::GridRow.class_name());
        row.set_attribute("data-count", &len.to_string())?;
        self.open_row = Some(row);
        Ok(())
    }

    fn figure(&mut self, target: Container, figure: &Figure) -> Result<(), JsValue> {
        let img = self.create_image(target, figure)?;
        match (target, self.open_row.as_ref()) {
            (Container::Grid, Some(row)) => row.append_child(&img)?,
            _ => self.container(target).append_child(&img)?,
        };
        if figure.loading == Loading::Eager {
            self.pending.push(img);
        }
        Ok(())
    }

    fn end_row(&mut self) -> Result<(), JsValue> {
        if let Some(row) = self.open_row.take() {
            self.grid.append_child(&row)?;
        }
        Ok(())
    }
}

fn figure_class(target: Container) -> ClassToken {
    match target {
        Container::Track => ClassToken::TrackFigure,
        Container::Grid => ClassToken::GridFigure,
    }
}
