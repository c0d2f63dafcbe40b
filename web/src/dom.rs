//! DOM side of the Delete-Interceptor: element lookup, reading the form,
//! and writing results back into the page.

use pigeon_core::{ClientError, FormSnapshot, Page};
use tracing::{debug, error, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement, Window};

use crate::error::MountError;

pub const FAILURE_NOTICE_ID: &str = "delete-failure";

pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::NoDocument)
}

pub fn document() -> Result<Document, MountError> {
    window()?.document().ok_or(MountError::NoDocument)
}

fn cast<T: JsCast>(
    found: Option<Element>,
    selector: &str,
    expected: &'static str,
) -> Result<T, MountError> {
    let element = found.ok_or_else(|| MountError::MissingElement {
        selector: selector.to_string(),
    })?;
    element.dyn_into::<T>().map_err(|_| MountError::WrongElement {
        selector: selector.to_string(),
        expected,
    })
}

/// First element in `document` matching `selector`, as a `T`.
pub fn find<T: JsCast>(
    document: &Document,
    selector: &str,
    expected: &'static str,
) -> Result<T, MountError> {
    cast(document.query_selector(selector)?, selector, expected)
}

/// First descendant of `parent` matching `selector`, as a `T`.
pub fn find_within<T: JsCast>(
    parent: &Element,
    selector: &str,
    expected: &'static str,
) -> Result<T, MountError> {
    cast(parent.query_selector(selector)?, selector, expected)
}

/// Read the form's current fields in document order.
///
/// File fields carry no text value and are left out.
pub fn snapshot_form(form: &HtmlFormElement) -> Result<FormSnapshot, MountError> {
    let data = FormData::new_with_form(form)?;
    let mut snapshot = FormSnapshot::new();
    for entry in data.entries() {
        let pair: js_sys::Array = entry?.unchecked_into();
        let name = pair.get(0).as_string().unwrap_or_default();
        match pair.get(1).as_string() {
            Some(value) => snapshot.push(name, value),
            None => debug!(field = %name, "skipping non-text form field"),
        }
    }
    Ok(snapshot)
}

/// The live page the interceptor writes into.
pub struct BrowserPage {
    document: Document,
    target: HtmlElement,
}

impl BrowserPage {
    /// Bind to the first element matching `target_selector`.
    pub fn locate(target_selector: &str) -> Result<Self, MountError> {
        let document = document()?;
        let target = find(&document, target_selector, "an HTML element")?;
        Ok(Self { document, target })
    }

    pub fn with_target(document: Document, target: HtmlElement) -> Self {
        Self { document, target }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn show_notice(&self, message: &str) -> Result<(), MountError> {
        if let Some(previous) = self.document.get_element_by_id(FAILURE_NOTICE_ID) {
            previous.remove();
        }
        let notice = self.document.create_element("div")?;
        notice.set_id(FAILURE_NOTICE_ID);
        notice.set_class_name("notification is-danger");
        notice.set_text_content(Some(message));
        self.target.prepend_with_node_1(&notice)?;
        Ok(())
    }
}

impl Page for BrowserPage {
    fn replace_body(&self, markup: &str) {
        self.target.set_inner_html(markup);
    }

    fn report_failure(&self, failure: &ClientError) {
        error!(error = %failure, "post was not deleted");
        if let Err(e) = self.show_notice(&failure.user_message()) {
            warn!(error = %e, "could not show failure notice");
        }
    }
}
