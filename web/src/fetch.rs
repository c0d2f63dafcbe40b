//! `Transport` over the browser's `fetch`.

use pigeon_core::{ClientError, HttpRequest, HttpResponse, RedirectPolicy, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestRedirect, Response, Window};

use crate::error::js_error;

pub struct FetchTransport {
    window: Window,
}

impl FetchTransport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

fn to_js_request(request: &HttpRequest) -> Result<Request, JsValue> {
    let headers = Headers::new()?;
    for (key, value) in &request.headers {
        headers.set(key, value)?;
    }

    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    init.set_headers(&headers);
    init.set_redirect(match request.redirect {
        RedirectPolicy::Follow => RequestRedirect::Follow,
        RedirectPolicy::Manual => RequestRedirect::Manual,
    });
    if let Some(body) = &request.body {
        init.set_body(&JsValue::from_str(body));
    }

    Request::new_with_str_and_init(&request.path, &init)
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let network = |e: JsValue| ClientError::Network(js_error(&e));
        let parse = |e: JsValue| ClientError::Parse(js_error(&e));

        let js_request = to_js_request(&request).map_err(network)?;
        let response: Response = JsFuture::from(self.window.fetch_with_request(&js_request))
            .await
            .map_err(network)?
            .dyn_into()
            .map_err(|_| ClientError::Parse("fetch did not resolve to a Response".to_string()))?;

        let status = response.status();
        let body = JsFuture::from(response.text().map_err(parse)?)
            .await
            .map_err(parse)?
            .as_string()
            .ok_or_else(|| ClientError::Parse("response body is not text".to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
