//! Binds the Filename-Display to the page's upload widget.

use pigeon_core::{FilenameDisplay, Label};
use tracing::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::config::PageConfig;
use crate::dom;
use crate::error::MountError;

/// Label backed by an element's text content.
#[derive(Debug, Clone)]
pub struct ElementLabel(Element);

impl Label for ElementLabel {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Names of the files chosen in `input`, read lazily in selection order.
pub fn selected_names(input: &HtmlInputElement) -> impl Iterator<Item = String> {
    let files = input.files();
    let len = files.as_ref().map_or(0, |list| list.length());
    (0..len).filter_map(move |i| {
        files
            .as_ref()
            .and_then(|list| list.item(i))
            .map(|file| file.name())
    })
}

/// A mounted upload widget. Dropping it removes the change listener.
pub struct UploadWidget {
    input: HtmlInputElement,
    listener: Closure<dyn FnMut()>,
}

impl UploadWidget {
    /// Resolve the widget's file input and name label from `config`.
    pub fn locate(
        document: &Document,
        config: &PageConfig,
    ) -> Result<(HtmlInputElement, Element), MountError> {
        let container: Element =
            dom::find(document, &config.upload_widget_selector, "an element")?;
        let input =
            dom::find_within(&container, &config.file_input_selector, "an input element")?;
        let label = dom::find_within(&container, &config.file_name_selector, "an element")?;
        Ok((input, label))
    }

    pub fn mount(input: HtmlInputElement, label: Element) -> Result<Self, MountError> {
        let display = FilenameDisplay::new(ElementLabel(label));

        let listener = Closure::<dyn FnMut()>::new({
            let input = input.clone();
            move || {
                display.on_change(selected_names(&input));
            }
        });
        input.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())?;
        info!("upload widget mounted");

        Ok(Self { input, listener })
    }
}

impl Drop for UploadWidget {
    fn drop(&mut self) {
        if let Err(e) = self
            .input
            .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref())
        {
            warn!(error = %crate::error::js_error(&e), "could not detach upload listener");
        }
    }
}
