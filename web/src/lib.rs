//! Browser host for `pigeon-core`.
//!
//! # Overview
//! Compiled to WebAssembly and loaded by the post-pigeon pages. On load it
//! installs console logging and binds the upload widget when the page has
//! one. The delete page keeps its inline handler:
//!
//! ```html
//! <form onsubmit="return sendDeletePost()"> ... </form>
//! ```
//!
//! # Design
//! - Page wiring lives in one thread-local `PageState`; `mount` replaces it,
//!   and dropping the previous `UploadWidget` detaches its listener.
//! - `sendDeletePost` reads the form synchronously, spawns the round-trip on
//!   the local executor and returns `false` whatever happens.

pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod upload;

use std::cell::RefCell;
use std::rc::Rc;

use pigeon_core::{DeleteInterceptor, PostsClient};
use tracing::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::HtmlFormElement;

pub use config::{LogLevel, PageConfig};
pub use dom::BrowserPage;
pub use error::MountError;
pub use fetch::FetchTransport;
pub use upload::UploadWidget;

#[derive(Default)]
struct PageState {
    config: PageConfig,
    upload: Option<UploadWidget>,
}

thread_local! {
    static STATE: RefCell<PageState> = RefCell::new(PageState::default());
}

/// Bind the page according to `config`. Returns whether an upload widget
/// was found and mounted.
pub fn mount_page(config: PageConfig) -> Result<bool, MountError> {
    logging::init(config.log_level.into());
    let document = dom::document()?;

    let upload = if document.query_selector(&config.upload_widget_selector)?.is_some() {
        let (input, label) = UploadWidget::locate(&document, &config)?;
        Some(UploadWidget::mount(input, label)?)
    } else {
        info!(selector = %config.upload_widget_selector, "no upload widget on this page");
        None
    };
    let mounted = upload.is_some();

    let previous = STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.config = config;
        std::mem::replace(&mut state.upload, upload)
    });
    drop(previous);

    Ok(mounted)
}

/// Intercept one submission using the mounted config.
pub fn intercept_delete(config: &PageConfig) -> Result<bool, MountError> {
    let page = Rc::new(BrowserPage::locate(&config.target_selector)?);
    let form: HtmlFormElement = dom::find(page.document(), &config.form_selector, "a form")?;
    let snapshot = dom::snapshot_form(&form)?;

    let interceptor = DeleteInterceptor::new(
        PostsClient::new(&config.endpoint_base),
        Rc::new(FetchTransport::new(dom::window()?)),
        page,
    );
    Ok(interceptor.submit(snapshot, |fut| wasm_bindgen_futures::spawn_local(fut)))
}

#[wasm_bindgen(start)]
pub fn start() {
    if let Err(e) = mount_page(PageConfig::default()) {
        error!(error = %e, "page setup failed");
    }
}

/// Re-bind the page with a custom config object (partial keys allowed).
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<bool, JsError> {
    let config: PageConfig = if config.is_undefined() || config.is_null() {
        PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| MountError::Config(e.to_string()))?
    };
    Ok(mount_page(config)?)
}

/// Inline submit handler for the delete form. Always `false`, so the
/// browser never performs the form's own submission.
#[wasm_bindgen(js_name = sendDeletePost)]
pub fn send_delete_post() -> bool {
    let config = STATE.with(|state| state.borrow().config.clone());
    intercept_delete(&config).unwrap_or_else(|e| {
        error!(error = %e, "delete not sent");
        false
    })
}
